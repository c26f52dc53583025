use std::io::{self, Write};

use fileshelf::Browser;

use crate::error::Result;

/// Raw bytes to stdout, the octet-stream counterpart of `view`.
pub fn execute(browser: &Browser, id: &str) -> Result<()> {
    let bytes = browser.image_bytes(id)?;
    io::stdout().write_all(&bytes)?;
    Ok(())
}
