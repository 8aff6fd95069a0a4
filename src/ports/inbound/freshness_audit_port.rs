use crate::application::dto::{AuditRequest, AuditSummary};
use crate::shared::Result;

/// FreshnessAuditPort - Inbound port for the freshness audit use case
///
/// This port defines the interface that external adapters (CLI, etc.)
/// use to trigger an audit. It represents the application's public API.
pub trait FreshnessAuditPort {
    /// Audits every forge-hosted dependency reachable from the project
    ///
    /// Per-dependency failures are part of the presented report and of the
    /// returned summary; they never surface as an `Err`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The root module of the project cannot be resolved
    /// - Writing the report fails
    fn audit(&self, request: AuditRequest) -> Result<AuditSummary>;
}
