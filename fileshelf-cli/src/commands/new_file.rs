use fileshelf::Browser;

use crate::error::Result;
use crate::utils;

pub fn execute(browser: &Browser, parent_id: &str, name: &str, content: &str) -> Result<()> {
    if name.trim().is_empty() {
        utils::print_info("Empty name, nothing created.");
        return Ok(());
    }
    browser.create_text_file(parent_id, name, content)?;
    utils::print_success(&format!("Created text file '{name}'"));
    Ok(())
}
