use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Suffix format appended to a save's basename when it is backed up.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H-%M-%S";

/// Format used when showing modification times to the user.
pub const EDIT_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Builds the sibling name a save is renamed to before being overwritten.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use savesync::utils::format::backup_file_name;
///
/// let at = Local.with_ymd_and_hms(2023, 1, 1, 9, 5, 3).unwrap();
/// assert_eq!(backup_file_name("ABCDSAVE", &at), "ABCDSAVE-backup-20230101-09-05-03");
/// ```
pub fn backup_file_name(basename: &str, at: &DateTime<Local>) -> String {
    format!("{}-backup-{}", basename, at.format(BACKUP_TIMESTAMP_FORMAT))
}

/// Renders a modification time in local time, e.g. `01/31/2024 18:04:59`.
pub fn format_edit_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(EDIT_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_backup_file_name_pads_every_field() {
        let at = Local.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            backup_file_name("save", &at),
            "save-backup-20230101-00-00-00"
        );
    }

    #[test]
    fn test_backup_file_name_keeps_extension_in_basename() {
        let at = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(
            backup_file_name("slot1.sav", &at),
            "slot1.sav-backup-20241231-23-59-58"
        );
    }

    #[test]
    fn test_format_edit_time_uses_local_time() {
        let at = Local.with_ymd_and_hms(2024, 1, 31, 18, 4, 59).unwrap();
        assert_eq!(format_edit_time(SystemTime::from(at)), "01/31/2024 18:04:59");
    }
}
