use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Reduce a user-supplied name to a filesystem-safe base name: trim, turn
/// spaces into underscores, drop everything that is not alphanumeric, `-`,
/// `_` or `.`. Returns `None` when nothing usable remains, so no sanitized
/// name can ever carry a path separator or climb out of its parent.
pub fn sanitize_file_name(name: &str) -> Option<String> {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => None,
        _ => Some(cleaned),
    }
}

fn safe_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    sanitize_file_name(name)
}

/// Create a sub-directory. Empty or unusable names and existing targets are
/// silent no-ops, never errors.
pub fn create_directory(parent: &Path, name: &str) -> Result<()> {
    let Some(valid) = safe_name(name) else {
        return Ok(());
    };
    let target = parent.join(valid);
    if target.exists() {
        return Ok(());
    }
    fs::create_dir(&target)?;
    info!(path = %target.display(), "created directory");
    Ok(())
}

/// Create a text file, forcing a `.txt` extension when missing. No-op on an
/// empty name or an existing target.
pub fn create_text_file(parent: &Path, name: &str, content: &str) -> Result<()> {
    let Some(mut valid) = safe_name(name) else {
        return Ok(());
    };
    if !valid.ends_with(".txt") {
        valid.push_str(".txt");
    }
    let target = parent.join(valid);
    if target.exists() {
        return Ok(());
    }
    fs::write(&target, content)?;
    info!(path = %target.display(), "created text file");
    Ok(())
}

/// Stream an upload to disk chunk by chunk; the payload is never held in
/// memory whole. No-op on an empty name or an existing target.
pub fn save_uploaded_file<R: Read>(parent: &Path, name: &str, upload: &mut R) -> Result<()> {
    let Some(valid) = safe_name(name) else {
        return Ok(());
    };
    let target = parent.join(valid);
    if target.exists() {
        return Ok(());
    }
    let mut dest = File::create(&target)?;
    let bytes = io::copy(upload, &mut dest)?;
    info!(path = %target.display(), bytes, "saved uploaded file");
    Ok(())
}

/// Rename a child of `parent`. Both names are sanitized; when the sanitized
/// old name is not on disk, underscores fall back to spaces once, locating
/// files created before a sanitization pass introduced the underscores.
/// Missing sources and empty new names are no-ops.
pub fn rename(parent: &Path, old_name: &str, new_name: &str) -> Result<()> {
    if new_name.is_empty() {
        return Ok(());
    }
    let (Some(old), Some(new)) = (safe_name(old_name), safe_name(new_name)) else {
        return Ok(());
    };
    let mut source = parent.join(&old);
    if !source.exists() {
        source = parent.join(old.replace('_', " "));
    }
    if !source.exists() {
        return Ok(());
    }
    let target = parent.join(&new);
    fs::rename(&source, &target)?;
    info!(from = %source.display(), to = %target.display(), "renamed entry");
    Ok(())
}

/// Replace a text file's content entirely, creating the file when absent.
/// Directories are left untouched.
pub fn update_text_content(path: &Path, content: &str) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::write(path, content)?;
    info!(path = %path.display(), "updated text content");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("old name"), Some("old_name".into()));
        assert_eq!(sanitize_file_name("  notes.txt "), Some("notes.txt".into()));
        assert_eq!(sanitize_file_name("a/b\\c.txt"), Some("abc.txt".into()));
        assert_eq!(sanitize_file_name("../../etc"), Some("....etc".into()));
        assert_eq!(sanitize_file_name("写真 1.jpg"), Some("写真_1.jpg".into()));
        assert_eq!(sanitize_file_name(""), None);
        assert_eq!(sanitize_file_name("   "), None);
        assert_eq!(sanitize_file_name(".."), None);
        assert_eq!(sanitize_file_name("/"), None);
    }

    #[test]
    fn test_create_directory_and_existing_noop() {
        let dir = tempfile::tempdir().unwrap();
        create_directory(dir.path(), "new folder").unwrap();
        let created = dir.path().join("new_folder");
        assert!(created.is_dir());

        // Existing target: nothing happens, no error.
        create_directory(dir.path(), "new folder").unwrap();
        assert!(created.is_dir());
    }

    #[test]
    fn test_create_directory_empty_name_noop() {
        let dir = tempfile::tempdir().unwrap();
        create_directory(dir.path(), "").unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_create_text_file_forces_txt_and_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        create_text_file(dir.path(), "notes", "hi").unwrap();
        let target = dir.path().join("notes.txt");
        assert_eq!(fs::read_to_string(&target).unwrap(), "hi");

        // A second call with different content must not overwrite.
        create_text_file(dir.path(), "notes", "changed").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "hi");

        create_text_file(dir.path(), "other.txt", "x").unwrap();
        assert!(dir.path().join("other.txt").exists());
        assert!(!dir.path().join("other.txt.txt").exists());
    }

    #[test]
    fn test_save_uploaded_file_streams_and_noops_on_existing() {
        let dir = tempfile::tempdir().unwrap();
        let payload = b"chunked upload body".to_vec();
        save_uploaded_file(dir.path(), "up load.bin", &mut payload.as_slice()).unwrap();
        let target = dir.path().join("up_load.bin");
        assert_eq!(fs::read(&target).unwrap(), payload);

        save_uploaded_file(dir.path(), "up load.bin", &mut b"other".as_slice()).unwrap();
        assert_eq!(fs::read(&target).unwrap(), payload);
    }

    #[test]
    fn test_rename_sanitized_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("old_name"), "x").unwrap();
        rename(dir.path(), "old name", "new").unwrap();
        assert!(!dir.path().join("old_name").exists());
        assert_eq!(fs::read_to_string(dir.path().join("new")).unwrap(), "x");
    }

    #[test]
    fn test_rename_underscore_fallback_finds_spaced_file() {
        let dir = tempfile::tempdir().unwrap();
        // On disk with spaces, from before names were sanitized on the way in.
        fs::write(dir.path().join("old name"), "x").unwrap();
        rename(dir.path(), "old_name", "new").unwrap();
        assert!(!dir.path().join("old name").exists());
        assert_eq!(fs::read_to_string(dir.path().join("new")).unwrap(), "x");
    }

    #[test]
    fn test_rename_missing_source_and_empty_new_are_noops() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keep"), "x").unwrap();
        rename(dir.path(), "absent", "new").unwrap();
        rename(dir.path(), "keep", "").unwrap();
        assert!(dir.path().join("keep").exists());
        assert!(!dir.path().join("new").exists());
    }

    #[test]
    fn test_update_text_content_overwrites_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.txt");
        fs::write(&file, "first").unwrap();
        update_text_content(&file, "second").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "second");

        update_text_content(dir.path(), "nope").unwrap();
        assert!(dir.path().is_dir());
    }
}
