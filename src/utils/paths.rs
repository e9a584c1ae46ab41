use crate::error::SyncError;
use std::path::PathBuf;

/// Expands `~`, `$VAR` and `${VAR}` in a configured path template.
///
/// Variables and the home directory are resolved through `lookup`, so the same
/// source feeds both the template and its placeholders. An undefined variable
/// is reported against `variable`, the setting the template came from.
pub fn expand_path(
    variable: &str,
    template: &str,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<PathBuf, SyncError> {
    let home = || lookup("HOME").or_else(|| lookup("USERPROFILE"));
    let context = |name: &str| -> Result<Option<String>, String> {
        lookup(name).map(Some).ok_or_else(|| "not set".to_string())
    };

    shellexpand::full_with_context(template, home, context)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| SyncError::configuration(variable, e.to_string()))
}
