use crate::freshness_audit::domain::{AccessToken, Dependency, TimestampResult};

/// LocalHistory port for the last change of a dependency's local checkout
pub trait LocalHistory {
    /// Returns the committer date of the most recent local commit, in UTC
    ///
    /// # Errors
    /// `TimestampError::LocalResolution` if the checkout is missing, the VCS
    /// invocation fails, or its output cannot be parsed.
    fn last_change(&self, dependency: &Dependency) -> TimestampResult;
}

/// RemoteHistory port for the last change of a dependency's default branch
///
/// The credential is passed per call; implementations must not read it
/// from ambient state.
pub trait RemoteHistory {
    /// Returns the committer date of the head of the remote default branch
    ///
    /// # Errors
    /// One of the `TimestampError::Remote*` variants.
    fn last_change(&self, dependency: &Dependency, token: &AccessToken) -> TimestampResult;
}
