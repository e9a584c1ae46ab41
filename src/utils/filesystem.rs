use crate::error::SyncError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

/// Order in which directory entries are considered during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryOrder {
    /// Whatever order the OS returns; not guaranteed stable across platforms.
    #[default]
    Listing,
    /// Names sorted lexicographically, so the first match is deterministic.
    Sorted,
}

/// A save candidate has neither a `-` (backups) nor a `.` (other dotted files).
pub fn is_save_candidate(name: &str) -> bool {
    !name.contains('-') && !name.contains('.')
}

/// Returns the first direct child of `dir` that looks like the real save file.
///
/// Entries whose names are not valid UTF-8 are skipped. Directories are not
/// filtered out.
pub fn discover_save_file(dir: &Path, order: DiscoveryOrder) -> Result<String, SyncError> {
    let entries = fs::read_dir(dir).map_err(|e| SyncError::filesystem("read directory", dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SyncError::filesystem("read directory", dir, e))?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    if order == DiscoveryOrder::Sorted {
        names.sort();
    }

    names
        .into_iter()
        .find(|name| is_save_candidate(name))
        .ok_or_else(|| SyncError::Discovery {
            directory: dir.to_path_buf(),
        })
}

/// Modification time of `path` itself; a trailing symlink is not followed.
pub fn modified_time(path: &Path) -> Result<SystemTime, SyncError> {
    fs::symlink_metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|e| SyncError::filesystem("read metadata of", path, e))
}

/// Renames `target` to `backup_name` inside the same directory.
///
/// This is a plain rename, so the backup must live on the same volume. The
/// backup is checked to exist afterwards before the path is returned.
pub fn rename_to_backup(target: &Path, backup_name: &str) -> Result<PathBuf, SyncError> {
    let backup_path = target.with_file_name(backup_name);

    fs::rename(target, &backup_path).map_err(|e| SyncError::filesystem("rename", target, e))?;

    fs::symlink_metadata(&backup_path)
        .map_err(|e| SyncError::filesystem("verify backup", &backup_path, e))?;

    Ok(backup_path)
}

/// Copies the bytes of `source` to `destination`.
///
/// The data is first staged in a temporary file next to `destination` and then
/// moved into place, so a partially written file never appears at the save path.
pub fn copy_over(source: &Path, destination: &Path) -> Result<(), SyncError> {
    let dir = destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let staged =
        NamedTempFile::new_in(dir).map_err(|e| SyncError::filesystem("stage copy in", dir, e))?;

    fs::copy(source, staged.path()).map_err(|e| SyncError::filesystem("copy", source, e))?;

    staged
        .persist(destination)
        .map_err(|e| SyncError::filesystem("write", destination, io::Error::from(e)))?;

    Ok(())
}
