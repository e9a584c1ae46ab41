use crate::error::SyncError;
use crate::logger::log_info;
use std::io::{self, Write};
use std::path::Path;

/// Represents a planned operation that a task would perform
#[derive(Debug, Clone)]
pub struct PlannedOperation {
    pub description: String,
    pub target: String,
}

impl PlannedOperation {
    pub fn with_target(description: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            target: target.into(),
        }
    }
}

/// A filesystem-mutating task that can describe itself before running.
pub trait Task {
    /// Human-readable name of the task
    fn name(&self) -> &str;

    /// Operations the task performs, in execution order
    fn plan(&self) -> Vec<PlannedOperation>;

    /// Perform the operations; stops at the first failure
    fn execute(&mut self) -> Result<(), SyncError>;
}

/// What the executor did with a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Executed,
    Skipped,
}

/// Announces a task's plan and runs it unless in dry-run mode.
pub struct TaskExecutor;

impl TaskExecutor {
    pub fn run<T: Task>(task: &mut T, dry_run: bool) -> Result<Execution, SyncError> {
        Self::run_with_output(task, dry_run, &mut io::stdout())
    }

    /// Same as [`TaskExecutor::run`], with the plan written to `out`.
    pub fn run_with_output<T: Task, W: Write>(
        task: &mut T,
        dry_run: bool,
        out: &mut W,
    ) -> Result<Execution, SyncError> {
        write_plan(task, dry_run, out)
            .map_err(|e| SyncError::filesystem("write plan to", Path::new("<output>"), e))?;

        if dry_run {
            log_info("Dry run: no files were changed.");
            return Ok(Execution::Skipped);
        }

        task.execute()?;
        Ok(Execution::Executed)
    }
}

fn write_plan<T: Task, W: Write>(task: &T, dry_run: bool, out: &mut W) -> io::Result<()> {
    let prefix = if dry_run { "[DRY RUN] " } else { "" };
    writeln!(out, "{}{}", prefix, task.name())?;

    let operations = task.plan();
    if operations.is_empty() {
        writeln!(out, "  No operations to perform.")?;
    } else {
        writeln!(out, "  Planned operations:")?;
        for op in &operations {
            writeln!(out, "    - {} -> {}", op.description, op.target)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planned_operation_with_target() {
        let op = PlannedOperation::with_target("Copy file", "/path/to/dest");
        assert_eq!(op.description, "Copy file");
        assert_eq!(op.target, "/path/to/dest");
    }

    struct CountingTask {
        name: String,
        operations: Vec<PlannedOperation>,
        execute_count: usize,
        fail: bool,
    }

    impl CountingTask {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                operations: vec![PlannedOperation::with_target("Rename", "/saves/backup")],
                execute_count: 0,
                fail: false,
            }
        }
    }

    impl Task for CountingTask {
        fn name(&self) -> &str {
            &self.name
        }

        fn plan(&self) -> Vec<PlannedOperation> {
            self.operations.clone()
        }

        fn execute(&mut self) -> Result<(), SyncError> {
            self.execute_count += 1;
            if self.fail {
                return Err(SyncError::filesystem(
                    "rename",
                    Path::new("/saves/slot"),
                    io::Error::other("disk full"),
                ));
            }
            Ok(())
        }
    }

    #[test]
    fn test_executor_runs_task() {
        let mut task = CountingTask::new("Executor Test");
        let result = TaskExecutor::run(&mut task, false).unwrap();
        assert_eq!(result, Execution::Executed);
        assert_eq!(task.execute_count, 1);
    }

    #[test]
    fn test_executor_dry_run_does_not_execute() {
        let mut task = CountingTask::new("Dry Run Test");
        let result = TaskExecutor::run(&mut task, true).unwrap();
        assert_eq!(result, Execution::Skipped);
        assert_eq!(task.execute_count, 0);
    }

    #[test]
    fn test_executor_handles_empty_plan() {
        let mut task = CountingTask::new("No-Op Task");
        task.operations.clear();
        assert_eq!(TaskExecutor::run(&mut task, true).unwrap(), Execution::Skipped);
    }

    #[test]
    fn test_executor_propagates_failure() {
        let mut task = CountingTask::new("Failing Task");
        task.fail = true;
        let result = TaskExecutor::run(&mut task, false);
        assert!(matches!(result, Err(SyncError::FileSystem { .. })));
        assert_eq!(task.execute_count, 1);
    }

    #[test]
    fn test_executor_mixed_dry_and_real_runs() {
        let mut task = CountingTask::new("Mixed Task");

        TaskExecutor::run(&mut task, true).unwrap();
        TaskExecutor::run(&mut task, false).unwrap();
        TaskExecutor::run(&mut task, true).unwrap();
        assert_eq!(task.execute_count, 1);
    }

    fn plan_output(task: &mut CountingTask, dry_run: bool) -> String {
        let mut out = Vec::new();
        TaskExecutor::run_with_output(task, dry_run, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dry_run_prints_same_plan_as_real_run() {
        let mut task = CountingTask::new("Plan Task");
        task.operations
            .push(PlannedOperation::with_target("Copy", "/saves/slot"));

        let dry = plan_output(&mut task, true);
        let real = plan_output(&mut task, false);

        assert_eq!(dry.lines().next(), Some("[DRY RUN] Plan Task"));
        assert_eq!(real.lines().next(), Some("Plan Task"));
        assert_eq!(
            dry.lines().skip(1).collect::<Vec<_>>(),
            real.lines().skip(1).collect::<Vec<_>>()
        );
        assert!(dry.contains("    - Copy -> /saves/slot"));
        assert_eq!(task.execute_count, 1);
    }

    #[test]
    fn test_empty_plan_is_announced() {
        let mut task = CountingTask::new("No-Op Task");
        task.operations.clear();
        assert!(plan_output(&mut task, true).contains("No operations to perform."));
    }
}
