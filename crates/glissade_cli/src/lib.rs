//! Glissade CLI support
//!
//! Headless tooling around `glissade_slider`: scripted scenario replay with
//! JSON reports, and config inspection.

pub mod assert;
pub mod inspect;
pub mod report;
pub mod runner;
pub mod scenario;

pub use inspect::Inspection;
pub use report::{ReplayReport, ReportStatus};
pub use runner::{run_loaded_scenario, run_scenario, RunConfig, RunOutcome};
pub use scenario::{Scenario, ScenarioStep};
