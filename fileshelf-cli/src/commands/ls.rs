use fileshelf::Browser;
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::utils;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    sequence: usize,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
}

pub fn execute(browser: &Browser, id: &str, page: usize, tile: bool) -> Result<()> {
    let view = browser.browse(id, page, tile)?;

    utils::print_header(&utils::format_breadcrumb(&view.entry.ancestors));

    if view.children_full.is_empty() {
        utils::print_info("Directory is empty.");
        return Ok(());
    }

    let rows: Vec<EntryRow> = view
        .children_page
        .iter()
        .map(|entry| EntryRow {
            sequence: entry.sequence,
            kind: format!("{} {}", utils::kind_icon(entry.kind), entry.kind),
            name: entry.name.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
    println!();
    println!("{}", utils::format_page_strip(&view.page_links));
    utils::print_info(&format!(
        "Page {} of {} - {} entries total",
        view.page,
        view.max_page,
        view.children_full.len()
    ));

    Ok(())
}
