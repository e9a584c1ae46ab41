use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Exit code used when both saves carry the exact same modification time.
pub const EXIT_TIE: i32 = 1;
/// Exit code used when no candidate save file exists in the primary directory.
pub const EXIT_DISCOVERY: i32 = 2;
/// Exit code used when required configuration is missing or malformed.
pub const EXIT_CONFIGURATION: i32 = 3;
/// Exit code used for any failed stat, listing, rename or copy.
pub const EXIT_FILESYSTEM: i32 = 4;
/// Exit code used when the command line itself cannot be parsed.
pub const EXIT_USAGE: i32 = 5;
/// Exit code used when a location reaches the mutation step unresolved.
pub const EXIT_INTERNAL: i32 = 70;

/// Every way a reconciliation run can fail. All variants are terminal for the run.
#[derive(Debug)]
pub enum SyncError {
    /// A required variable is unset, empty, or could not be expanded.
    Configuration { variable: String, reason: String },
    /// The primary directory holds no entry matching the save-name heuristic.
    Discovery { directory: PathBuf },
    /// Both saves were modified at the exact same instant.
    Tie,
    /// A save location was used before its filename was resolved.
    Unresolved { directory: PathBuf },
    /// A filesystem call failed; the io error is kept verbatim.
    FileSystem {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl SyncError {
    pub fn configuration(variable: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            variable: variable.into(),
            reason: reason.into(),
        }
    }

    pub fn filesystem(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::FileSystem {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Process exit status the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::Tie => EXIT_TIE,
            SyncError::Discovery { .. } => EXIT_DISCOVERY,
            SyncError::Configuration { .. } => EXIT_CONFIGURATION,
            SyncError::FileSystem { .. } => EXIT_FILESYSTEM,
            SyncError::Unresolved { .. } => EXIT_INTERNAL,
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Configuration { variable, reason } => {
                write!(f, "Invalid configuration for {}: {}", variable, reason)
            }
            SyncError::Discovery { directory } => write!(
                f,
                "Couldn't find a file in {} that matches the save formatting (no candidate save file found)",
                directory.display()
            ),
            SyncError::Tie => write!(
                f,
                "These two files were modified at the exact same time and are presumed identical, exiting."
            ),
            SyncError::Unresolved { directory } => write!(
                f,
                "Save location in {} has no resolved filename",
                directory.display()
            ),
            SyncError::FileSystem {
                action,
                path,
                source,
            } => write!(f, "Failed to {} {}: {}", action, path.display(), source),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}
