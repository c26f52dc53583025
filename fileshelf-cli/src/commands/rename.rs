use fileshelf::Browser;

use crate::error::Result;
use crate::utils;

pub fn execute(browser: &Browser, parent_id: &str, old_name: &str, new_name: &str) -> Result<()> {
    if new_name.trim().is_empty() {
        utils::print_info("Empty new name, nothing renamed.");
        return Ok(());
    }
    browser.rename(parent_id, old_name, new_name)?;
    utils::print_success(&format!("Renamed '{old_name}' to '{new_name}'"));
    Ok(())
}
