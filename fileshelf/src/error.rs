use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Not found: {0}")]
    NotFound(PathBuf),

    #[error("Id escapes the root directory: {0}")]
    PathEscape(String),

    #[error("Malformed id: {0}")]
    InvalidId(String),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Not a viewable file: {0}")]
    NotAFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BrowseError>;
