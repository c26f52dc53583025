use std::path::Path;

use crate::error::Result;
use crate::model::page::PageLink;
use crate::tree::classify::{self, EntryKind};
use crate::tree::resolver::PathResolver;

/// One navigable filesystem node: a directory or a classified file.
///
/// Entries are built per request and discarded with the response; the
/// filesystem itself is the only durable state.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Percent-encoded path relative to the root. Opaque to callers,
    /// reversible through [`PathResolver`].
    pub id: String,
    pub kind: EntryKind,
    /// Base name component of the path.
    pub name: String,
    /// 1-based position among the listed siblings. Display hint only, never
    /// identity; ancestors carry 0 here.
    pub sequence: usize,
    /// Root-first breadcrumb chain, ending with this entry itself. Empty
    /// until filled by the browse/view operation that owns the entry.
    pub ancestors: Vec<Entry>,
}

impl Entry {
    pub fn from_path(path: &Path, sequence: usize, resolver: &PathResolver) -> Result<Entry> {
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();
        Ok(Entry {
            id: resolver.unresolve(path)?,
            kind: classify::classify(path),
            name,
            sequence,
            ancestors: Vec::new(),
        })
    }

    /// Alternating-row styling hint for listings.
    pub fn alternate_row(&self) -> bool {
        self.sequence % 2 == 0
    }
}

/// Result of browsing one directory: the full classified child list, the
/// slice visible on the requested page, and the pagination controls.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    pub entry: Entry,
    /// Every immediate child, directories first, then files; one running
    /// 1-based sequence across both.
    pub children_full: Vec<Entry>,
    /// Contiguous slice of `children_full` for `page`.
    pub children_page: Vec<Entry>,
    pub page: usize,
    pub page_size: usize,
    pub tile: bool,
    pub max_page: usize,
    pub prev_page: usize,
    pub next_page: usize,
    pub page_links: Vec<PageLink>,
    pub slide_show_interval_ms: u64,
}

/// A file prepared for viewing. Flat closed set of variants; the payload a
/// variant carries is exactly what its renderer needs.
#[derive(Debug, Clone)]
pub enum Document {
    Text { entry: Entry, content: String },
    /// `encoded` is a base64 data URI, ready for an `img src` attribute.
    Image { entry: Entry, encoded: String },
    /// Published to the public directory before this value is returned.
    Pdf { entry: Entry },
    /// Published to the public directory before this value is returned.
    Media { entry: Entry },
    /// Hidden and unclassified files: ancestors only, no payload.
    Other { entry: Entry },
}

impl Document {
    pub fn entry(&self) -> &Entry {
        match self {
            Document::Text { entry, .. }
            | Document::Image { entry, .. }
            | Document::Pdf { entry }
            | Document::Media { entry }
            | Document::Other { entry } => entry,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.entry().kind
    }
}
