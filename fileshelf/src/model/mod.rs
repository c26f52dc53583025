//! Display model: entries, documents and pagination links.

pub mod entry;
pub mod page;

pub use entry::{DirectoryView, Document, Entry};
pub use page::PageLink;
