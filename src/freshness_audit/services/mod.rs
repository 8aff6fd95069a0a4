mod freshness_reporter;
mod import_walker;

pub use freshness_reporter::FreshnessReporter;
pub use import_walker::{ImportGraphWalker, WalkOutcome};
