use crate::freshness_audit::domain::{AccessToken, Dependency, FreshnessReport};
use crate::ports::outbound::{LocalHistory, RemoteHistory};

/// FreshnessReporter service comparing local and remote last-change instants
///
/// Both sources are always queried, so a failure on one side never hides
/// the other side's result.
pub struct FreshnessReporter<LH, RH> {
    local_history: LH,
    remote_history: RH,
}

impl<LH, RH> FreshnessReporter<LH, RH>
where
    LH: LocalHistory,
    RH: RemoteHistory,
{
    pub fn new(local_history: LH, remote_history: RH) -> Self {
        Self {
            local_history,
            remote_history,
        }
    }

    pub fn local_history(&self) -> &LH {
        &self.local_history
    }

    pub fn remote_history(&self) -> &RH {
        &self.remote_history
    }

    /// Resolves both timestamps for `dependency` and classifies them
    pub fn report(&self, dependency: &Dependency, token: &AccessToken) -> FreshnessReport {
        let local = self.local_history.last_change(dependency);
        if let Err(e) = &local {
            tracing::warn!(dependency = dependency.import_path(), error = %e, "local timestamp unavailable");
        }

        let remote = self.remote_history.last_change(dependency, token);
        if let Err(e) = &remote {
            tracing::warn!(dependency = dependency.import_path(), error = %e, "remote timestamp unavailable");
        }

        FreshnessReport::new(dependency.import_path(), local, remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freshness_audit::domain::{ForgeIdentity, Freshness, TimestampResult};
    use crate::shared::error::TimestampError;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::cell::Cell;

    struct FixedLocal {
        result: TimestampResult,
        calls: Cell<usize>,
    }

    impl LocalHistory for FixedLocal {
        fn last_change(&self, _dependency: &Dependency) -> TimestampResult {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    struct FixedRemote {
        result: TimestampResult,
        seen_token: std::cell::RefCell<Option<String>>,
    }

    impl RemoteHistory for FixedRemote {
        fn last_change(&self, _dependency: &Dependency, token: &AccessToken) -> TimestampResult {
            *self.seen_token.borrow_mut() = Some(token.as_str().to_string());
            self.result.clone()
        }
    }

    fn reporter(local: TimestampResult, remote: TimestampResult) -> FreshnessReporter<FixedLocal, FixedRemote> {
        FreshnessReporter::new(
            FixedLocal {
                result: local,
                calls: Cell::new(0),
            },
            FixedRemote {
                result: remote,
                seen_token: std::cell::RefCell::new(None),
            },
        )
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, 2, 8, 0, 0).unwrap()
    }

    fn dependency() -> Dependency {
        Dependency::new(&ForgeIdentity::github(), "github.com/mgutz/ansi", "github.com/me/app").unwrap()
    }

    #[test]
    fn test_report_current() {
        let reporter = reporter(Ok(instant()), Ok(instant() + Duration::seconds(30)));
        let report = reporter.report(&dependency(), &AccessToken::anonymous());
        assert_eq!(report.status(), Some(Freshness::Current));
        assert_eq!(report.import_path(), "github.com/mgutz/ansi");
    }

    #[test]
    fn test_report_outdated() {
        let reporter = reporter(Ok(instant() - Duration::days(3)), Ok(instant()));
        let report = reporter.report(&dependency(), &AccessToken::anonymous());
        assert_eq!(report.status(), Some(Freshness::Outdated));
    }

    #[test]
    fn test_local_failure_still_queries_remote() {
        let reporter = reporter(Err(TimestampError::local("not a git repository")), Ok(instant()));
        let report = reporter.report(&dependency(), &AccessToken::new("ghp_token"));

        assert!(report.local().is_err());
        assert_eq!(report.remote(), &Ok(instant()));
        assert_eq!(report.status(), None);
        assert_eq!(
            reporter.remote_history.seen_token.borrow().as_deref(),
            Some("ghp_token")
        );
    }

    #[test]
    fn test_remote_failure_still_queries_local() {
        let reporter = reporter(
            Ok(instant()),
            Err(TimestampError::RemoteTransport {
                details: "connection refused".to_string(),
            }),
        );
        let report = reporter.report(&dependency(), &AccessToken::anonymous());

        assert_eq!(reporter.local_history.calls.get(), 1);
        assert_eq!(report.local(), &Ok(instant()));
        assert!(report.remote().is_err());
        assert_eq!(report.status(), None);
    }
}
