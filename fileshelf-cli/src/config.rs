use std::env;
use std::fs;
use std::path::PathBuf;

use fileshelf::BrowseConfig;

use crate::error::{FileshelfCliError, Result};

const CONFIG_ENV_VAR: &str = "FILESHELF_CONFIG";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_PUBLIC_DIR: &str = ".fileshelf-public";

/// Locate and load the browse configuration. Order: explicit `--config`
/// path, the `FILESHELF_CONFIG` environment variable, the user config
/// directory, and finally defaults rooted at the working directory.
pub fn load(explicit: Option<&PathBuf>) -> Result<BrowseConfig> {
    let config = match config_path(explicit) {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            BrowseConfig::from_str(&raw)
                .map_err(|e| FileshelfCliError::Config(format!("{}: {e}", path.display())))?
        }
        None => default_config()?,
    };

    // Publishing pdf/media needs the public directory in place.
    fs::create_dir_all(&config.public_dir)?;
    Ok(config)
}

fn config_path(explicit: Option<&PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.clone());
    }
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    let candidate = dirs::config_dir()?.join("fileshelf").join(CONFIG_FILE_NAME);
    candidate.exists().then_some(candidate)
}

fn default_config() -> Result<BrowseConfig> {
    let cwd = env::current_dir()?;
    let public = cwd.join(DEFAULT_PUBLIC_DIR);
    Ok(BrowseConfig::new(cwd, public))
}
