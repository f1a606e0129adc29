//! Copy planner - plan container and generation

mod build;
mod plan;

pub use build::{build_plan, plan_source_listing};
pub use plan::{CopyPlan, PlanStats};
