use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fileshelf::Browser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod interactive;
mod utils;

#[derive(Parser)]
#[command(name = "fileshelf")]
#[command(about = "Sandboxed directory tree browser")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a JSON config file (falls back to FILESHELF_CONFIG, the user
    /// config directory, then the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List a directory page by page
    Ls {
        /// Entry id ("" is the root)
        #[arg(default_value = "")]
        id: String,
        /// Page number, 1-based
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Tile layout (larger page size)
        #[arg(short, long)]
        tile: bool,
    },
    /// View a file the way its kind calls for
    View {
        /// Entry id
        id: String,
    },
    /// Write a file's raw bytes to stdout
    Cat {
        /// Entry id
        id: String,
    },
    /// Save a file out of the shelf
    Download {
        /// Entry id
        id: String,
        /// Destination directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Create a sub-directory
    Mkdir {
        /// Parent entry id ("" is the root)
        #[arg(default_value = "")]
        parent: String,
        /// New directory name
        name: String,
    },
    /// Create a text file
    NewFile {
        /// Parent entry id ("" is the root)
        #[arg(default_value = "")]
        parent: String,
        /// File name (.txt gets appended when missing)
        name: String,
        /// Initial content
        #[arg(default_value = "")]
        content: String,
    },
    /// Upload a local file into the shelf
    Upload {
        /// Parent entry id ("" is the root)
        #[arg(default_value = "")]
        parent: String,
        /// Local file to upload
        file: PathBuf,
    },
    /// Rename an entry
    Rename {
        /// Parent entry id ("" is the root)
        #[arg(default_value = "")]
        parent: String,
        /// Current name
        old_name: String,
        /// New name
        new_name: String,
    },
    /// Replace a text file's content (from the argument or stdin)
    Edit {
        /// Entry id
        id: String,
        /// New content; omit to read from stdin
        content: Option<String>,
    },
    /// Start interactive mode
    Interactive,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let browse_config = config::load(cli.config.as_ref())?;
    let browser = Browser::new(browse_config);

    match cli.command {
        Some(Commands::Ls { id, page, tile }) => {
            commands::ls::execute(&browser, &id, page, tile)?;
        }
        Some(Commands::View { id }) => {
            commands::view::execute(&browser, &id)?;
        }
        Some(Commands::Cat { id }) => {
            commands::cat::execute(&browser, &id)?;
        }
        Some(Commands::Download { id, out }) => {
            commands::download::execute(&browser, &id, &out)?;
        }
        Some(Commands::Mkdir { parent, name }) => {
            commands::mkdir::execute(&browser, &parent, &name)?;
        }
        Some(Commands::NewFile {
            parent,
            name,
            content,
        }) => {
            commands::new_file::execute(&browser, &parent, &name, &content)?;
        }
        Some(Commands::Upload { parent, file }) => {
            commands::upload::execute(&browser, &parent, &file)?;
        }
        Some(Commands::Rename {
            parent,
            old_name,
            new_name,
        }) => {
            commands::rename::execute(&browser, &parent, &old_name, &new_name)?;
        }
        Some(Commands::Edit { id, content }) => {
            commands::edit::execute(&browser, &id, content.as_deref())?;
        }
        Some(Commands::Interactive) | None => {
            interactive::run(&browser)?;
        }
    }

    Ok(())
}
