use std::io::Read;

use fileshelf::Browser;

use crate::error::Result;
use crate::utils;

/// Replace a text file's content, either from the argument or from stdin.
pub fn execute(browser: &Browser, id: &str, content: Option<&str>) -> Result<()> {
    let content = match content {
        Some(c) => c.to_string(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    browser.update_text_content(id, &content)?;
    utils::print_success("Content updated.");
    Ok(())
}
