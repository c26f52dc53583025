use std::fmt;
use std::path::Path;

const TEXT_EXTENSIONS: &[&str] = &["txt", "text"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
const MEDIA_EXTENSIONS: &[&str] = &["mp4", "mp3", "m4a", "flv", "wmv"];

/// Semantic kind of one filesystem entry, derived from path metadata alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    Text,
    Image,
    Pdf,
    Media,
    Hidden,
    Other,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::Text => "text",
            EntryKind::Image => "image",
            EntryKind::Pdf => "pdf",
            EntryKind::Media => "media",
            EntryKind::Hidden => "hidden",
            EntryKind::Other => "other",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a path. Checks run top to bottom and the first match wins, so a
/// dotfile named `.note.txt` is hidden, not text.
pub fn classify(path: &Path) -> EntryKind {
    if path.is_dir() {
        return EntryKind::Directory;
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if name.starts_with('.') {
        return EntryKind::Hidden;
    }
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if TEXT_EXTENSIONS.contains(&extension) {
        EntryKind::Text
    } else if IMAGE_EXTENSIONS.contains(&extension) {
        EntryKind::Image
    } else if extension == "pdf" {
        EntryKind::Pdf
    } else if MEDIA_EXTENSIONS.contains(&extension) {
        EntryKind::Media
    } else {
        EntryKind::Other
    }
}
