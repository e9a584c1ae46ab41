use crate::error::EXIT_USAGE;
use clap::Parser;

/// Command line interface for `savesync`.
///
/// Save locations come from the environment (`SAVESYNC_PRIMARY_DIR`,
/// `SAVESYNC_SECONDARY_PATH`); the switches below only adjust how a run behaves.
#[derive(Parser, Debug)]
#[command(
    name = "savesync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep the newest of two save-game copies and back up the stale one"
)]
pub struct Cli {
    /// Print the plan without renaming or copying anything (also enabled by DRY_RUN=true)
    #[arg(long)]
    pub dry_run: bool,

    /// Sort the primary directory before picking the save file, for a stable choice
    #[arg(long)]
    pub sorted: bool,
}

/// Exit status for a failed parse: `--help`/`--version` are 0, usage errors get
/// their own code instead of clap's default 2, which the discovery failure owns.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { EXIT_USAGE } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EXIT_CONFIGURATION, EXIT_DISCOVERY, EXIT_FILESYSTEM, EXIT_INTERNAL, EXIT_TIE};
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["savesync"]);
        assert!(!cli.dry_run);
        assert!(!cli.sorted);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["savesync", "--dry-run", "--sorted"]);
        assert!(cli.dry_run);
        assert!(cli.sorted);
    }

    #[test]
    fn test_unknown_flag_has_its_own_exit_code() {
        let err = Cli::try_parse_from(["savesync", "--bogus"]).unwrap_err();
        let code = parse_exit_code(&err);
        assert_eq!(code, EXIT_USAGE);
        for taken in [
            0,
            EXIT_TIE,
            EXIT_DISCOVERY,
            EXIT_CONFIGURATION,
            EXIT_FILESYSTEM,
            EXIT_INTERNAL,
        ] {
            assert_ne!(code, taken);
        }
    }

    #[test]
    fn test_help_and_version_exit_cleanly() {
        for flag in ["--help", "--version"] {
            let err = Cli::try_parse_from(["savesync", flag]).unwrap_err();
            assert_eq!(parse_exit_code(&err), 0, "{}", flag);
        }
    }
}
