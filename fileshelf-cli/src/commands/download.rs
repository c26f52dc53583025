use std::fs;
use std::path::Path;

use fileshelf::Browser;

use crate::error::Result;
use crate::utils;

pub fn execute(browser: &Browser, id: &str, out_dir: &Path) -> Result<()> {
    let entry = browser.inspect(id)?;
    let download = browser.download(id)?;

    fs::create_dir_all(out_dir)?;
    let target = out_dir.join(&entry.name);
    fs::write(&target, &download.bytes)?;

    utils::print_success(&format!(
        "Saved {} ({})",
        target.display(),
        utils::format_size(download.bytes.len() as u64)
    ));
    utils::print_info(&format!(
        "Content-Disposition: attachment; filename*=UTF-8''{}",
        download.quoted_name
    ));
    Ok(())
}
