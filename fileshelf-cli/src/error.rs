use inquire::error::InquireError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileshelfCliError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("{0}")]
    Browse(#[from] fileshelf::BrowseError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Interaction(#[from] InquireError),
}

pub type Result<T> = std::result::Result<T, FileshelfCliError>;
