use fileshelf::{Browser, Document};

use crate::error::Result;
use crate::utils;

pub fn execute(browser: &Browser, id: &str) -> Result<()> {
    let document = browser.view(id)?;
    utils::print_header(&utils::format_breadcrumb(&document.entry().ancestors));

    match document {
        Document::Text { content, .. } => {
            println!("{content}");
        }
        Document::Image { encoded, .. } => {
            // The full data URI, ready to paste into an img tag.
            println!("{encoded}");
        }
        Document::Pdf { entry } | Document::Media { entry } => {
            let published = browser.config().public_dir.join(&entry.name);
            utils::print_success(&format!(
                "Published for streaming at {}",
                published.display()
            ));
        }
        Document::Other { entry } => {
            utils::print_info(&format!(
                "{} {} has no inline view; try 'fileshelf download'",
                entry.kind, entry.name
            ));
        }
    }

    Ok(())
}
