use fileshelf::Browser;

use crate::error::Result;
use crate::utils;

pub fn execute(browser: &Browser, parent_id: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        utils::print_info("Empty name, nothing created.");
        return Ok(());
    }
    browser.create_directory(parent_id, name)?;
    utils::print_success(&format!("Created directory '{name}'"));
    Ok(())
}
