use crate::config::Config;
use crate::decision::{Decision, decide};
use crate::error::SyncError;
use crate::logger::{log_info, log_success, log_warning};
use crate::prompt::{CONFIRM_MESSAGE, Confirmer};
use crate::save::{FileLocation, SaveLocations};
use crate::tasks::core::{Execution, PlannedOperation, Task, TaskExecutor};
use crate::utils::filesystem::{copy_over, discover_save_file, modified_time, rename_to_backup};
use crate::utils::format::{backup_file_name, format_edit_time};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// How a run that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The stale save was backed up and replaced.
    Completed,
    /// The plan was printed but nothing was touched.
    DryRun,
    /// The user answered no at the confirmation prompt.
    Declined,
}

/// Backs up the stale save, then copies the fresh one over its old path.
#[derive(Debug)]
pub struct ReconcileTask {
    keep_label: String,
    remove_label: String,
    keep_path: PathBuf,
    remove_path: PathBuf,
    remove_basename: String,
    backup_name: String,
}

impl ReconcileTask {
    /// The backup name is fixed here from `at`, so the plan and the rename agree.
    pub fn new(
        locations: &SaveLocations,
        decision: Decision,
        at: &DateTime<Local>,
    ) -> Result<Self, SyncError> {
        let remove = locations.get(decision.remove);
        let remove_basename = remove
            .filename
            .clone()
            .ok_or_else(|| SyncError::Unresolved {
                directory: remove.directory.clone(),
            })?;

        Ok(Self {
            keep_label: locations.label(decision.keep).to_string(),
            remove_label: locations.label(decision.remove).to_string(),
            keep_path: resolved_path(locations.get(decision.keep))?,
            remove_path: resolved_path(remove)?,
            backup_name: backup_file_name(&remove_basename, at),
            remove_basename,
        })
    }

    pub fn backup_path(&self) -> PathBuf {
        self.remove_path.with_file_name(&self.backup_name)
    }
}

impl Task for ReconcileTask {
    fn name(&self) -> &str {
        "Replace stale save"
    }

    fn plan(&self) -> Vec<PlannedOperation> {
        vec![
            PlannedOperation::with_target(
                format!(
                    "Rename your {} save file {}",
                    self.remove_label, self.remove_basename
                ),
                self.backup_name.clone(),
            ),
            PlannedOperation::with_target(
                "Backup full path",
                self.backup_path().display().to_string(),
            ),
            PlannedOperation::with_target(
                format!(
                    "Copy your {} save file {}",
                    self.keep_label,
                    self.keep_path.display()
                ),
                self.remove_path.display().to_string(),
            ),
        ]
    }

    fn execute(&mut self) -> Result<(), SyncError> {
        let backup = rename_to_backup(&self.remove_path, &self.backup_name)?;
        log_info(&format!("Backed up {} to {}", self.remove_basename, backup.display()));

        if let Err(e) = copy_over(&self.keep_path, &self.remove_path) {
            log_warning(&vacated_message(&self.remove_path, &backup));
            return Err(e);
        }

        Ok(())
    }
}

fn vacated_message(path: &Path, backup: &Path) -> String {
    format!(
        "{} is now missing; its previous content is kept in {}",
        path.display(),
        backup.display()
    )
}

fn resolved_path(location: &FileLocation) -> Result<PathBuf, SyncError> {
    location.path().ok_or_else(|| SyncError::Unresolved {
        directory: location.directory.clone(),
    })
}

/// Runs one reconciliation pass.
///
/// `clock` is read once, after confirmation, to name the backup.
pub fn run(
    config: &Config,
    confirmer: &mut dyn Confirmer,
    clock: &dyn Fn() -> DateTime<Local>,
) -> Result<Outcome, SyncError> {
    let mut locations = config.locations();

    let filename = discover_save_file(&config.primary_dir, config.discovery_order)?;
    log_success(&format!(
        "Found a matching file {} in the {} save directory",
        filename, locations.primary_label
    ));
    let primary_path = locations.primary.resolve(filename);
    let secondary_path = resolved_path(&locations.secondary)?;

    let primary_time = modified_time(&primary_path)?;
    let secondary_time = modified_time(&secondary_path)?;

    if config.dry_run {
        log_info("Running in DRY RUN MODE, your files are safe.");
    } else {
        log_warning("Not in dry run mode, THIS WILL PERMANENTLY CHANGE FILES");
    }

    println!();
    println!("Found both save files.");
    println!();
    println!("{} Last Edit Time:", locations.primary_label);
    println!("    {}", format_edit_time(primary_time));
    println!("{} Last Edit Time:", locations.secondary_label);
    println!("    {}", format_edit_time(secondary_time));
    println!();

    let decision = decide(primary_time, secondary_time)?;
    println!(
        "We will keep your {} save file and replace your {} save file.",
        locations.label(decision.keep),
        locations.label(decision.remove)
    );

    if !confirmer.confirm(CONFIRM_MESSAGE) {
        log_info("No changes made.");
        return Ok(Outcome::Declined);
    }

    let mut task = ReconcileTask::new(&locations, decision, &clock())?;
    match TaskExecutor::run(&mut task, config.dry_run)? {
        Execution::Skipped => Ok(Outcome::DryRun),
        Execution::Executed => {
            log_success("Success!");
            Ok(Outcome::Completed)
        }
    }
}
