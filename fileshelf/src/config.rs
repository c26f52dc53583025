use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_TILE_ITEMS_PER_PAGE: usize = 30;
pub const DEFAULT_SLIDE_SHOW_INTERVAL_MS: u64 = 3000;

/// Configuration for one browser instance. Passed explicitly into
/// [`crate::Browser`]; nothing here is read from the process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Sandbox boundary. Every id resolves to a path under this directory.
    pub root_dir: PathBuf,

    /// Where pdf and media files get copied so a static-file server (or the
    /// local player) can stream them.
    pub public_dir: PathBuf,

    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    #[serde(default = "default_tile_items_per_page")]
    pub tile_items_per_page: usize,

    /// Consumed by the rendering side for image slide shows; carried in the
    /// browse result untouched.
    #[serde(default = "default_slide_show_interval_ms")]
    pub slide_show_interval_ms: u64,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_tile_items_per_page() -> usize {
    DEFAULT_TILE_ITEMS_PER_PAGE
}

fn default_slide_show_interval_ms() -> u64 {
    DEFAULT_SLIDE_SHOW_INTERVAL_MS
}

impl BrowseConfig {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(root_dir: P, public_dir: Q) -> Self {
        Self {
            root_dir: root_dir.as_ref().to_path_buf(),
            public_dir: public_dir.as_ref().to_path_buf(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            tile_items_per_page: DEFAULT_TILE_ITEMS_PER_PAGE,
            slide_show_interval_ms: DEFAULT_SLIDE_SHOW_INTERVAL_MS,
        }
    }

    pub fn from_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Page size for the requested layout mode, never below 1 whatever the
    /// config file says.
    pub fn page_size(&self, tile: bool) -> usize {
        let size = if tile {
            self.tile_items_per_page
        } else {
            self.items_per_page
        };
        size.max(1)
    }
}
