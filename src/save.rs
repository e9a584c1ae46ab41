use std::path::{Path, PathBuf};

/// Identifies one of the two save locations being reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveSource {
    /// Save whose filename varies per install and is discovered by scanning its directory.
    Primary,
    /// Save with a fixed, fully configured path.
    Secondary,
}

impl SaveSource {
    pub fn other(self) -> Self {
        match self {
            SaveSource::Primary => SaveSource::Secondary,
            SaveSource::Secondary => SaveSource::Primary,
        }
    }
}

/// A directory plus the save's filename inside it, once known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    pub directory: PathBuf,
    pub filename: Option<String>,
}

impl FileLocation {
    /// A location whose filename still has to be discovered.
    pub fn pending(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            filename: None,
        }
    }

    /// Splits a full file path into its parent directory and basename.
    ///
    /// Returns `None` when the path has no usable UTF-8 file name.
    pub fn from_file_path(path: &Path) -> Option<Self> {
        let filename = path.file_name()?.to_str()?.to_string();
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Some(Self {
            directory,
            filename: Some(filename),
        })
    }

    pub fn resolve(&mut self, filename: impl Into<String>) -> PathBuf {
        let filename = filename.into();
        let path = self.directory.join(&filename);
        self.filename = Some(filename);
        path
    }

    /// Full path of the save, or `None` while the filename is pending.
    pub fn path(&self) -> Option<PathBuf> {
        self.filename.as_ref().map(|name| self.directory.join(name))
    }
}

/// The two save locations together with the names shown to the user.
#[derive(Debug, Clone)]
pub struct SaveLocations {
    pub primary: FileLocation,
    pub secondary: FileLocation,
    pub primary_label: String,
    pub secondary_label: String,
}

impl SaveLocations {
    pub fn get(&self, source: SaveSource) -> &FileLocation {
        match source {
            SaveSource::Primary => &self.primary,
            SaveSource::Secondary => &self.secondary,
        }
    }

    pub fn label(&self, source: SaveSource) -> &str {
        match source {
            SaveSource::Primary => &self.primary_label,
            SaveSource::Secondary => &self.secondary_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_flips_variant() {
        assert_eq!(SaveSource::Primary.other(), SaveSource::Secondary);
        assert_eq!(SaveSource::Secondary.other(), SaveSource::Primary);
    }

    #[test]
    fn test_pending_location_has_no_path() {
        let location = FileLocation::pending("/saves/console");
        assert!(location.filename.is_none());
        assert!(location.path().is_none());
    }

    #[test]
    fn test_resolve_sets_filename_and_returns_full_path() {
        let mut location = FileLocation::pending("/saves/console");
        let path = location.resolve("ABCDSAVE");
        assert_eq!(path, PathBuf::from("/saves/console/ABCDSAVE"));
        assert_eq!(location.path(), Some(path));
        assert_eq!(location.filename.as_deref(), Some("ABCDSAVE"));
    }

    #[test]
    fn test_from_file_path_splits_parent_and_basename() {
        let location = FileLocation::from_file_path(Path::new("/games/pc/slot1.sav")).unwrap();
        assert_eq!(location.directory, PathBuf::from("/games/pc"));
        assert_eq!(location.filename.as_deref(), Some("slot1.sav"));
    }

    #[test]
    fn test_from_file_path_rejects_root() {
        assert!(FileLocation::from_file_path(Path::new("/")).is_none());
    }
}
