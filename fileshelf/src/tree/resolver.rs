use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::error::{BrowseError, Result};

/// Translates externally visible, percent-encoded ids into absolute paths
/// under a fixed root directory, and back. The resolver is the sandbox
/// boundary: no id ever resolves outside the root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an id to an absolute path inside the root. The empty id (and
    /// a bare `/`) is the root itself. A `..` sequence that would climb past
    /// the root is rejected with [`BrowseError::PathEscape`].
    pub fn resolve(&self, id: &str) -> Result<PathBuf> {
        let decoded = urlencoding::decode(id)
            .map_err(|_| BrowseError::InvalidId(id.to_string()))?
            .into_owned();
        let relative = decoded.trim_start_matches('/');

        let mut normalized = PathBuf::new();
        let mut depth: usize = 0;
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => {
                    normalized.push(part);
                    depth += 1;
                }
                Component::ParentDir => {
                    if depth == 0 {
                        warn!(id, "rejected id traversing outside the root");
                        return Err(BrowseError::PathEscape(id.to_string()));
                    }
                    normalized.pop();
                    depth -= 1;
                }
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }

        Ok(self.root.join(normalized))
    }

    /// Inverse of [`resolve`](Self::resolve): strip the root prefix and
    /// percent-encode each path segment. The root itself maps to the empty
    /// id; everything else starts with `/`.
    pub fn unresolve(&self, path: &Path) -> Result<String> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| BrowseError::PathEscape(path.display().to_string()))?;

        let mut id = String::new();
        for component in relative.components() {
            let part = component.as_os_str().to_string_lossy();
            id.push('/');
            id.push_str(&urlencoding::encode(&part));
        }
        Ok(id)
    }
}
