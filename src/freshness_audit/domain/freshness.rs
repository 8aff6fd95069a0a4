use crate::shared::error::TimestampError;
use chrono::{DateTime, Utc};

/// Result of resolving one side of a timestamp pair
pub type TimestampResult = Result<DateTime<Utc>, TimestampError>;

/// Freshness classification of a local checkout against its remote branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Current,
    Outdated,
}

impl Freshness {
    /// Classifies a timestamp pair at whole-minute granularity.
    ///
    /// `local - remote` truncated to whole minutes must be exactly zero for
    /// the checkout to count as current. The check is symmetric in sign: a
    /// local checkout ahead of the remote is outdated too.
    pub fn classify(local: DateTime<Utc>, remote: DateTime<Utc>) -> Self {
        if (local - remote).num_minutes() == 0 {
            Freshness::Current
        } else {
            Freshness::Outdated
        }
    }

    pub fn is_current(self) -> bool {
        matches!(self, Freshness::Current)
    }
}

/// FreshnessReport for a single dependency
///
/// Holds both timestamp results independently; the classification is only
/// present when both sides resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct FreshnessReport {
    import_path: String,
    local: TimestampResult,
    remote: TimestampResult,
    status: Option<Freshness>,
}

impl FreshnessReport {
    pub fn new(import_path: impl Into<String>, local: TimestampResult, remote: TimestampResult) -> Self {
        let status = match (&local, &remote) {
            (Ok(local), Ok(remote)) => Some(Freshness::classify(*local, *remote)),
            _ => None,
        };

        Self {
            import_path: import_path.into(),
            local,
            remote,
            status,
        }
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    pub fn local(&self) -> &TimestampResult {
        &self.local
    }

    pub fn remote(&self) -> &TimestampResult {
        &self.remote
    }

    pub fn status(&self) -> Option<Freshness> {
        self.status
    }
}
