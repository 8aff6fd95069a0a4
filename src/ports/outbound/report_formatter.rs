use crate::freshness_audit::domain::FreshnessReport;

/// ReportFormatter port for rendering audit output
///
/// Implementations turn domain results into presentable text; they do not
/// write anything themselves.
pub trait ReportFormatter {
    /// Formats the run header announcing how many dependencies will be checked
    fn format_header(&self, total: usize) -> String;

    /// Formats the block for a single dependency
    fn format_report(&self, report: &FreshnessReport) -> String;
}
