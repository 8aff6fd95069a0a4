use crate::freshness_audit::domain::{Freshness, FreshnessReport, SkipReason};

/// AuditSummary - Response DTO with per-run totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    /// Import path of the audited module
    pub root_module: String,
    /// Dependencies checked after exclusions
    pub checked: usize,
    pub current: usize,
    pub outdated: usize,
    /// Dependencies with at least one failed timestamp
    pub unresolved: usize,
    /// Imports the walker did not follow
    pub skipped: Vec<SkipReason>,
}

impl AuditSummary {
    pub fn new(root_module: impl Into<String>) -> Self {
        Self {
            root_module: root_module.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, report: &FreshnessReport) {
        self.checked += 1;
        match report.status() {
            Some(Freshness::Current) => self.current += 1,
            Some(Freshness::Outdated) => self.outdated += 1,
            None => self.unresolved += 1,
        }
    }
}

impl std::fmt::Display for AuditSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Checked {} package(s): {} up to date, {} outdated, {} unresolved",
            self.checked, self.current, self.outdated, self.unresolved
        )
    }
}
