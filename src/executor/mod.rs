//! Executor module for file operations

mod copy;
mod tree;

pub use copy::copy_file;
pub use tree::{copy_tree, TreeOutcome};

use crate::config::Config;
use crate::planner::CopyPlan;
use crate::types::SequinError;

/// Execution statistics for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Number of tasks in the input plan.
    pub total_tasks: usize,
    /// Number of processed tasks (reported under dry-run, copied otherwise).
    pub completed: usize,
    /// Aggregate copied bytes. Always zero under dry-run.
    pub bytes_copied: u64,
}

/// Execute a copy plan in plan order.
///
/// For each task: unless `silent`, the `source ---> destination` line is
/// printed; unless `dry_run`, the file is copied. The two flags are
/// independent, so a silent dry-run is a no-op and a silent real run copies
/// without output.
///
/// A copy failure aborts the remaining plan and propagates; tasks already
/// completed stay on disk, and the next run's index scan picks up from the
/// destination's new contents.
pub fn execute_plan(plan: &CopyPlan, config: &Config) -> Result<ExecutionStats, SequinError> {
    let mut stats = ExecutionStats {
        total_tasks: plan.len(),
        ..Default::default()
    };

    for task in &plan.tasks {
        if !config.silent {
            println!("{task}");
        }
        if !config.dry_run {
            stats.bytes_copied += copy_file(&task.source, &task.destination)?;
        }
        stats.completed += 1;
    }

    Ok(stats)
}
