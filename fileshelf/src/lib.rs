//! Core library for browsing a sandboxed directory tree. The crate turns a
//! configured root directory into a navigable model: classified entries,
//! breadcrumb ancestor chains, paginated child listings, per-kind document
//! preparation, and name-sanitized mutations. Everything outside the root is
//! out of reach by construction; serving, rendering and dispatch belong to
//! the callers.

/// The engine facade tying resolution, navigation and mutations together.
pub mod browser;
/// Explicit configuration values passed into the engine.
pub mod config;
/// Failure kinds shared across the crate.
pub mod error;
/// Display model: entries, documents, pagination links.
pub mod model;
/// Mutations and static publishing.
pub mod ops;
/// Path resolution, classification and tree navigation.
pub mod tree;

pub use browser::{Browser, Download};
pub use config::BrowseConfig;
pub use error::{BrowseError, Result};
pub use model::{DirectoryView, Document, Entry, PageLink};
pub use tree::{EntryKind, PathResolver};
