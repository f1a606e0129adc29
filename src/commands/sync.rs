//! Main sync command

use crate::config::Config;
use crate::executor::execute_plan;
use crate::index::DestinationIndex;
use crate::planner::build_plan;
use crate::scanner::validate_folders;
use crate::types::SequinError;
use crate::ui::Reporter;

/// Run the synchronization pipeline.
///
/// The stages run strictly in order - validate, scan indices, plan, execute -
/// and each completes before the next begins. Planning and execution never
/// interleave, which is what makes the dry-run report exact.
pub fn run(config: Config) -> Result<(), SequinError> {
    validate_folders(&config.pairs)?;

    let reporter = Reporter::new(config.silent);

    reporter.start_scan();
    let mut index = DestinationIndex::scan(&config.pairs)?;
    reporter.finish_scan(index.destination_count());

    let plan = build_plan(&config.pairs, &config.ignore, &mut index)?;
    reporter.print_plan_summary(&plan.stats);

    if plan.is_empty() {
        reporter.nothing_to_sync();
        return Ok(());
    }

    if config.dry_run {
        reporter.announce_dry_run();
    }
    let stats = execute_plan(&plan, &config)?;
    reporter.finish(&stats, config.dry_run);

    Ok(())
}
