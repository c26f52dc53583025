use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Copy `source` into the public directory under `name`, replacing whatever
/// sat there before. Pdf and media entries are streamed by a static-file
/// path instead of being read through the engine, so they must exist under
/// a stable public name before the view response goes out.
pub fn publish(source: &Path, public_dir: &Path, name: &str) -> Result<PathBuf> {
    let target = public_dir.join(name);
    if target.exists() {
        fs::remove_file(&target)?;
    }
    fs::copy(source, &target)?;
    set_public_permissions(&target)?;
    info!(from = %source.display(), to = %target.display(), "published file");
    Ok(target)
}

/// Owner read/write, world read.
#[cfg(unix)]
fn set_public_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o604))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_public_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
