//! Copy plan generation

use crate::index::DestinationIndex;
use crate::planner::CopyPlan;
use crate::scanner::list_source_files;
use crate::types::{normalize_name, CopyPair, CopyTask, IndexedName, SequinError};
use std::fs;

/// Build the copy plan for an ordered set of pairs.
///
/// Pairs are visited in input order and each source folder's files in
/// natural listing order, so the plan order is reproducible for a given
/// filesystem snapshot. Planning never writes to the filesystem.
///
/// `index` must contain scanned state for every destination in `pairs`;
/// counters are consumed in place, so pairs sharing a destination continue
/// one index sequence.
pub fn build_plan(
    pairs: &[CopyPair],
    ignore: &[String],
    index: &mut DestinationIndex,
) -> Result<CopyPlan, SequinError> {
    let mut plan = CopyPlan::new();
    for pair in pairs {
        let names = list_source_files(&pair.source)?;
        plan_source_listing(pair, &names, ignore, index, &mut plan)?;
    }
    Ok(plan)
}

/// Plan one source folder's listing against its destination's index state.
///
/// Split out from [`build_plan`] so the decision sequence can be driven with
/// an explicit listing order.
pub fn plan_source_listing<S: AsRef<str>>(
    pair: &CopyPair,
    names: &[S],
    ignore: &[String],
    index: &mut DestinationIndex,
    plan: &mut CopyPlan,
) -> Result<(), SequinError> {
    let state = index.state_mut(&pair.destination).ok_or_else(|| {
        SequinError::Config(format!(
            "destination folder {} was not scanned",
            pair.destination.display()
        ))
    })?;

    for name in names {
        let name = name.as_ref();
        if ignore.iter().any(|ignored| ignored == name) {
            plan.record_ignored();
            continue;
        }

        let base = normalize_name(name);
        if state.contains(&base) {
            plan.record_existing();
            continue;
        }

        let indexed = IndexedName::new(state.assign(&base), base);
        let source = pair.source.join(name);
        // Size feeds the summary only; an unreadable size is not fatal here.
        let bytes = fs::metadata(&source).map(|m| m.len()).unwrap_or(0);
        plan.add_task(
            CopyTask::new(source, pair.destination.join(indexed.to_string())),
            bytes,
        );
    }
    Ok(())
}
