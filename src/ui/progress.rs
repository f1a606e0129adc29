//! Progress reporting

use crate::executor::ExecutionStats;
use crate::planner::PlanStats;
use console::style;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};

/// Reporter for scan progress and run summaries.
///
/// Under `--silent` every method is a no-op; the executor's per-task lines
/// are suppressed separately by the same flag.
pub struct Reporter {
    scan_bar: ProgressBar,
    silent: bool,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(silent: bool) -> Self {
        let scan_bar = if silent {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        if !silent {
            scan_bar.enable_steady_tick(std::time::Duration::from_millis(120));
            if let Ok(template) = ProgressStyle::with_template("{spinner} {msg}") {
                scan_bar.set_style(template.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
            }
        }
        Self { scan_bar, silent }
    }

    /// Mark the start of the destination index scan.
    pub fn start_scan(&self) {
        self.scan_bar.set_message("Scanning destinations...");
    }

    /// Mark the end of the destination index scan.
    pub fn finish_scan(&self, destinations: usize) {
        self.scan_bar
            .finish_with_message(format!("Scanned {} destination folder(s)", destinations));
    }

    /// Print the plan summary.
    pub fn print_plan_summary(&self, stats: &PlanStats) {
        if self.silent {
            return;
        }
        println!("{}", format_plan_summary(stats));
    }

    /// Announce that the following task lines are a dry-run report.
    pub fn announce_dry_run(&self) {
        if self.silent {
            return;
        }
        println!("{}", style("Planned copies (dry-run):").bold());
    }

    /// Report that the plan came out empty.
    pub fn nothing_to_sync(&self) {
        if self.silent {
            return;
        }
        println!("Nothing to synchronize.");
    }

    /// Print the completion summary.
    pub fn finish(&self, stats: &ExecutionStats, dry_run: bool) {
        if self.silent {
            return;
        }
        if dry_run {
            println!(
                "{}",
                style("Dry-run mode: no changes were made.").yellow()
            );
        } else {
            println!(
                "Copied {} file(s) | {}",
                stats.completed,
                HumanBytes(stats.bytes_copied)
            );
        }
    }
}

fn format_plan_summary(stats: &PlanStats) -> String {
    format!(
        "Plan:\n  Copy: {}  Already synchronized: {}  Ignored: {}\n  Total bytes to transfer: {}",
        stats.planned,
        stats.skipped_existing,
        stats.skipped_ignored,
        HumanBytes(stats.total_bytes)
    )
}
