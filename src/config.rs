use crate::error::SyncError;
use crate::save::{FileLocation, SaveLocations};
use crate::utils::filesystem::DiscoveryOrder;
use crate::utils::paths::expand_path;
use std::path::PathBuf;

/// Directory scanned for the dynamically named save.
pub const PRIMARY_DIR_VAR: &str = "SAVESYNC_PRIMARY_DIR";
/// Full path of the save with a fixed name.
pub const SECONDARY_PATH_VAR: &str = "SAVESYNC_SECONDARY_PATH";
pub const PRIMARY_LABEL_VAR: &str = "SAVESYNC_PRIMARY_LABEL";
pub const SECONDARY_LABEL_VAR: &str = "SAVESYNC_SECONDARY_LABEL";
/// Only the literal value `true` enables dry-run mode.
pub const DRY_RUN_VAR: &str = "DRY_RUN";

/// Everything a run needs, built once at startup and passed down by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub primary_dir: PathBuf,
    pub secondary: FileLocation,
    pub primary_label: String,
    pub secondary_label: String,
    pub dry_run: bool,
    pub discovery_order: DiscoveryOrder,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, SyncError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, SyncError> {
        let primary_dir = expand_path(PRIMARY_DIR_VAR, &required(lookup, PRIMARY_DIR_VAR)?, lookup)?;
        let secondary_path =
            expand_path(SECONDARY_PATH_VAR, &required(lookup, SECONDARY_PATH_VAR)?, lookup)?;

        let secondary = FileLocation::from_file_path(&secondary_path).ok_or_else(|| {
            SyncError::configuration(
                SECONDARY_PATH_VAR,
                format!("{} does not name a file", secondary_path.display()),
            )
        })?;

        Ok(Self {
            primary_dir,
            secondary,
            primary_label: label(lookup, PRIMARY_LABEL_VAR, "primary"),
            secondary_label: label(lookup, SECONDARY_LABEL_VAR, "secondary"),
            dry_run: lookup(DRY_RUN_VAR).as_deref() == Some("true"),
            discovery_order: DiscoveryOrder::Listing,
        })
    }

    /// Applies command line switches on top of the environment.
    ///
    /// `--dry-run` can only turn dry-run mode on, never off.
    pub fn with_overrides(mut self, force_dry_run: bool, sorted: bool) -> Self {
        self.dry_run |= force_dry_run;
        if sorted {
            self.discovery_order = DiscoveryOrder::Sorted;
        }
        self
    }

    /// Fresh locations for a run; the primary filename is still pending.
    pub fn locations(&self) -> SaveLocations {
        SaveLocations {
            primary: FileLocation::pending(&self.primary_dir),
            secondary: self.secondary.clone(),
            primary_label: self.primary_label.clone(),
            secondary_label: self.secondary_label.clone(),
        }
    }
}

fn required(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<String, SyncError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Some(_) => Err(SyncError::configuration(key, "is empty")),
        None => Err(SyncError::configuration(key, "is not set")),
    }
}

fn label(lookup: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
