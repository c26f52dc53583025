use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::entry::Entry;
use crate::tree::resolver::PathResolver;

/// Hard cap on the ancestor walk. Keeps pathological trees and symlink
/// tricks from turning a breadcrumb into an endless loop.
const MAX_ANCESTOR_DEPTH: usize = 128;

/// Breadcrumb chain for `path`: root first, the entry itself last. The
/// root's own chain is the single-element list containing the root.
pub fn ancestors(path: &Path, resolver: &PathResolver) -> Result<Vec<Entry>> {
    let mut chain: Vec<PathBuf> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut current = path.to_path_buf();

    loop {
        if !seen.insert(current.clone()) {
            break;
        }
        chain.push(current.clone());
        if current == resolver.root() || chain.len() >= MAX_ANCESTOR_DEPTH {
            break;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => break,
        }
    }

    chain.reverse();
    chain
        .iter()
        .map(|ancestor| Entry::from_path(ancestor, 0, resolver))
        .collect()
}

/// Immediate children of a directory: every sub-directory first, then every
/// file, each family in iteration order, with one running 1-based sequence.
/// Entries that vanish between enumeration and inspection are skipped.
pub fn children(dir: &Path, resolver: &PathResolver) -> Result<Vec<Entry>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for want_dir in [true, false] {
        for dir_entry in fs::read_dir(dir)?.flatten() {
            let path = dir_entry.path();
            let is_dir = path.is_dir();
            let keep = if want_dir { is_dir } else { !is_dir && path.is_file() };
            if keep {
                paths.push(path);
            }
        }
    }

    paths
        .iter()
        .enumerate()
        .map(|(index, path)| Entry::from_path(path, index + 1, resolver))
        .collect()
}
