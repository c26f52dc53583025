//! Path resolution, entry classification and tree navigation.

pub mod classify;
pub mod nav;
pub mod resolver;

pub use classify::EntryKind;
pub use resolver::PathResolver;
