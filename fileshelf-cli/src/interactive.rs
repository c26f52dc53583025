use std::fmt;

use console::style;
use fileshelf::{Browser, Document, Entry, EntryKind};
use inquire::{Select, Text};

use crate::error::Result;
use crate::utils;

enum Choice {
    Entry(Entry),
    PrevPage(usize),
    NextPage(usize),
    Up(String),
    NewDirectory,
    NewTextFile,
    Rename,
    Exit,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Entry(entry) => {
                write!(
                    f,
                    "{:>3}. {} {}",
                    entry.sequence,
                    utils::kind_icon(entry.kind),
                    entry.name
                )
            }
            Choice::PrevPage(page) => write!(f, "⬅️  Previous page ({page})"),
            Choice::NextPage(page) => write!(f, "➡️  Next page ({page})"),
            Choice::Up(_) => write!(f, "⬆️  Go up"),
            Choice::NewDirectory => write!(f, "➕ New directory"),
            Choice::NewTextFile => write!(f, "📝 New text file"),
            Choice::Rename => write!(f, "✏️  Rename an entry"),
            Choice::Exit => write!(f, "❌ Exit"),
        }
    }
}

pub fn run(browser: &Browser) -> Result<()> {
    utils::print_welcome();

    let mut id = String::new();
    let mut page = 1usize;

    loop {
        let view = browser.browse(&id, page, false)?;
        println!();
        println!(
            "{}",
            style(utils::format_breadcrumb(&view.entry.ancestors)).bold()
        );
        println!("{}", utils::format_page_strip(&view.page_links));

        let mut choices: Vec<Choice> = view
            .children_page
            .iter()
            .cloned()
            .map(Choice::Entry)
            .collect();
        if view.page > 1 {
            choices.push(Choice::PrevPage(view.prev_page));
        }
        if view.page < view.max_page {
            choices.push(Choice::NextPage(view.next_page));
        }
        if let Some(parent) = parent_id(&view.entry) {
            choices.push(Choice::Up(parent));
        }
        choices.push(Choice::NewDirectory);
        choices.push(Choice::NewTextFile);
        choices.push(Choice::Rename);
        choices.push(Choice::Exit);

        match Select::new("Where to?", choices).prompt()? {
            Choice::Entry(entry) => {
                if entry.kind == EntryKind::Directory {
                    id = entry.id;
                    page = 1;
                } else if let Err(e) = show_document(browser, &entry.id) {
                    utils::print_error(&format!("Failed to view {}: {e}", entry.name));
                }
            }
            Choice::PrevPage(p) | Choice::NextPage(p) => page = p,
            Choice::Up(parent) => {
                id = parent;
                page = 1;
            }
            Choice::NewDirectory => {
                let name = Text::new("Directory name:").prompt()?;
                browser.create_directory(&id, &name)?;
            }
            Choice::NewTextFile => {
                let name = Text::new("File name:").prompt()?;
                let content = Text::new("Content:").prompt()?;
                browser.create_text_file(&id, &name, &content)?;
            }
            Choice::Rename => {
                let old_name = Text::new("Current name:").prompt()?;
                let new_name = Text::new("New name:").prompt()?;
                browser.rename(&id, &old_name, &new_name)?;
            }
            Choice::Exit => {
                utils::print_success("Goodbye! 👋");
                break;
            }
        }
    }

    Ok(())
}

/// Second-to-last ancestor, if the entry is not the root itself.
fn parent_id(entry: &Entry) -> Option<String> {
    let chain = &entry.ancestors;
    if chain.len() < 2 {
        return None;
    }
    chain.get(chain.len() - 2).map(|parent| parent.id.clone())
}

fn show_document(browser: &Browser, id: &str) -> Result<()> {
    match browser.view(id)? {
        Document::Text { entry, content } => {
            utils::print_header(&entry.name);
            println!("{content}");
        }
        Document::Image { entry, encoded } => {
            utils::print_header(&entry.name);
            utils::print_info(&format!("Web-encoded image, {} chars", encoded.len()));
        }
        Document::Pdf { entry } | Document::Media { entry } => {
            let published = browser.config().public_dir.join(&entry.name);
            utils::print_success(&format!("Published at {}", published.display()));
        }
        Document::Other { entry } => {
            utils::print_info(&format!("{} has no inline view", entry.name));
        }
    }
    Ok(())
}
