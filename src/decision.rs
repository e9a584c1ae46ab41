use crate::error::SyncError;
use crate::save::SaveSource;
use std::time::SystemTime;

/// Which save survives and which one gets replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub keep: SaveSource,
    pub remove: SaveSource,
}

impl Decision {
    fn keeping(source: SaveSource) -> Self {
        Self {
            keep: source,
            remove: source.other(),
        }
    }
}

/// Picks the save with the later modification time.
///
/// Times are compared exactly, at the platform's native resolution. Equal
/// times cannot be ordered and yield [`SyncError::Tie`].
pub fn decide(primary: SystemTime, secondary: SystemTime) -> Result<Decision, SyncError> {
    if primary > secondary {
        Ok(Decision::keeping(SaveSource::Primary))
    } else if secondary > primary {
        Ok(Decision::keeping(SaveSource::Secondary))
    } else {
        Err(SyncError::Tie)
    }
}
