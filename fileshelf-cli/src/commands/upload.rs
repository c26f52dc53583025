use std::fs::File;
use std::path::Path;

use fileshelf::Browser;

use crate::error::{FileshelfCliError, Result};
use crate::utils;

/// Stream a local file into the shelf under its own base name.
pub fn execute(browser: &Browser, parent_id: &str, source: &Path) -> Result<()> {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            FileshelfCliError::Input(format!("{} has no file name", source.display()))
        })?;

    let mut reader = File::open(source)?;
    browser.save_uploaded_file(parent_id, &name, &mut reader)?;
    utils::print_success(&format!("Uploaded '{name}'"));
    Ok(())
}
