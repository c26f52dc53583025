use console::{Emoji, style};
use fileshelf::{Entry, EntryKind, PageLink};

pub static SPARKLE: Emoji<'_, '_> = Emoji("✨  ", "");

pub fn print_welcome() {
    println!(
        "{}",
        style("╔══════════════════════════════════════╗").cyan()
    );
    println!(
        "{}",
        style("║            🗂  FILESHELF             ║").cyan()
    );
    println!(
        "{}",
        style("║      Sandboxed Directory Browser     ║").cyan()
    );
    println!(
        "{}",
        style("╚══════════════════════════════════════╝").cyan()
    );
    println!();
    println!("{SPARKLE} Welcome to Fileshelf - browse your shelf without leaving it!");
}

pub fn print_success(message: &str) {
    println!("{} {}", style("✅").green(), style(message).green());
}

pub fn print_error(message: &str) {
    println!("{} {}", style("❌").red(), style(message).red());
}

pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ️").blue(), style(message).blue());
}

pub fn print_separator() {
    println!("{}", style("─".repeat(60)).dim());
}

pub fn print_header(title: &str) {
    println!();
    print_separator();
    println!("{}", style(title).bold().cyan());
    print_separator();
}

pub fn kind_icon(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "📁",
        EntryKind::Text => "📄",
        EntryKind::Image => "🖼️",
        EntryKind::Pdf => "📕",
        EntryKind::Media => "🎬",
        EntryKind::Hidden => "🫥",
        EntryKind::Other => "📦",
    }
}

/// Breadcrumb line from a root-first ancestor chain.
pub fn format_breadcrumb(ancestors: &[Entry]) -> String {
    if ancestors.is_empty() {
        return "(root)".to_string();
    }
    ancestors
        .iter()
        .map(|a| if a.id.is_empty() { "(root)" } else { a.name.as_str() })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// One-line rendering of the page strip, current page highlighted.
pub fn format_page_strip(links: &[PageLink]) -> String {
    links
        .iter()
        .map(|link| {
            if link.is_current {
                style(format!("[{}]", link.label)).bold().cyan().to_string()
            } else {
                link.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
