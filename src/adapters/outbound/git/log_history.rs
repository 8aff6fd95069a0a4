use super::command::run_git;
use crate::freshness_audit::domain::{Dependency, TimestampResult};
use crate::ports::outbound::{LocalHistory, ModuleLocator};
use crate::shared::error::TimestampError;
use chrono::{DateTime, Utc};

/// Layout of `git log --date=rfc2822` committer dates, e.g. `Mon, 2 Jan 2006 15:04:05 -0700`
pub const GIT_DATE_LAYOUT: &str = "%a, %e %b %Y %H:%M:%S %z";

/// Parses a git RFC 2822 date and normalizes it to UTC
pub fn parse_git_date(output: &str) -> TimestampResult {
    DateTime::parse_from_str(output.trim(), GIT_DATE_LAYOUT)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| TimestampError::local(format!("cannot parse git date '{}': {}", output.trim(), e)))
}

/// GitLogHistory adapter reading the last commit date of a local checkout
///
/// The checkout is the dependency's package directory as found by the
/// module locator; git resolves the enclosing repository from there.
pub struct GitLogHistory<L> {
    locator: L,
}

impl<L: ModuleLocator> GitLogHistory<L> {
    pub fn new(locator: L) -> Self {
        Self { locator }
    }
}

impl<L: ModuleLocator> LocalHistory for GitLogHistory<L> {
    fn last_change(&self, dependency: &Dependency) -> TimestampResult {
        let dir = self.locator.module_dir(dependency.import_path()).ok_or_else(|| {
            TimestampError::local(format!(
                "source directory of {} not found",
                dependency.import_path()
            ))
        })?;

        let output = run_git(
            &["log", "-1", "--date=rfc2822", "--pretty=format:%cd"],
            Some(&dir),
        )
        .map_err(|e| TimestampError::local(e.to_string()))?;

        parse_git_date(&output)
    }
}
