use crate::freshness_audit::domain::{Freshness, FreshnessReport, TimestampResult};
use crate::ports::outbound::ReportFormatter;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// ConsoleFormatter adapter rendering the plain-text freshness report
///
/// Layout per dependency:
///
/// ```text
/// Package: github.com/account/repo
/// Local:   2024-03-09 12:30:00 UTC
/// Github:  2024-03-09 12:30:00 UTC
/// Status: OK
/// -----------------------------------
/// ```
///
/// The status line is omitted when either timestamp failed, and the
/// separator is as wide as the import path.
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormatter {
    plain: bool,
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter that never emits ANSI color codes
    pub fn plain() -> Self {
        Self { plain: true }
    }

    fn timestamp_line(out: &mut String, label: &str, result: &TimestampResult) {
        match result {
            Ok(instant) => {
                let _ = writeln!(out, "{}   {}", label, instant);
            }
            Err(e) => {
                let _ = writeln!(out, "{}  Error ({})", label, e);
            }
        }
    }

    fn status_text(&self, status: Freshness) -> String {
        match (status, self.plain) {
            (Freshness::Current, true) => "OK".to_string(),
            (Freshness::Outdated, true) => "Outdated".to_string(),
            (Freshness::Current, false) => "OK".green().to_string(),
            (Freshness::Outdated, false) => "Outdated".red().to_string(),
        }
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format_header(&self, total: usize) -> String {
        let message = format!("Total packages found: {}", total);
        format!("{}\n{}\n", message, "-".repeat(message.len()))
    }

    fn format_report(&self, report: &FreshnessReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Package: {}", report.import_path());
        Self::timestamp_line(&mut out, "Local: ", report.local());
        Self::timestamp_line(&mut out, "Github:", report.remote());

        if let Some(status) = report.status() {
            let _ = writeln!(out, "Status: {}", self.status_text(status));
        }

        let _ = writeln!(out, "{}", "-".repeat(report.import_path().len()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::TimestampError;
    use chrono::{Duration, TimeZone, Utc};

    fn instant() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_format_header() {
        let header = ConsoleFormatter::new().format_header(3);
        assert_eq!(
            header,
            "Total packages found: 3\n-----------------------\n"
        );
    }

    #[test]
    fn test_format_current_report() {
        let report = FreshnessReport::new("github.com/a/b", Ok(instant()), Ok(instant()));
        let output = ConsoleFormatter::plain().format_report(&report);
        assert_eq!(
            output,
            "Package: github.com/a/b\n\
             Local:    2024-03-09 12:30:00 UTC\n\
             Github:   2024-03-09 12:30:00 UTC\n\
             Status: OK\n\
             --------------\n"
        );
    }

    #[test]
    fn test_format_outdated_report_is_colored() {
        let report = FreshnessReport::new(
            "github.com/a/b",
            Ok(instant() - Duration::hours(2)),
            Ok(instant()),
        );
        let output = ConsoleFormatter::new().format_report(&report);
        assert!(output.contains("Outdated"));
        assert!(output.contains("\u{1b}[31m"));
    }

    #[test]
    fn test_format_failed_side_has_no_status() {
        let report = FreshnessReport::new(
            "github.com/a/b",
            Ok(instant()),
            Err(TimestampError::RemoteNotFound { status: 404 }),
        );
        let output = ConsoleFormatter::plain().format_report(&report);
        assert!(output.contains("Local:    2024-03-09 12:30:00 UTC"));
        assert!(output.contains("Github:  Error (branch not found (HTTP 404))"));
        assert!(!output.contains("Status:"));
    }

    #[test]
    fn test_format_both_sides_failed() {
        let report = FreshnessReport::new(
            "github.com/a/b",
            Err(TimestampError::local("source directory of github.com/a/b not found")),
            Err(TimestampError::RemoteTransport {
                details: "timed out".to_string(),
            }),
        );
        let output = ConsoleFormatter::plain().format_report(&report);
        assert!(output.contains("Local:   Error"));
        assert!(output.contains("Github:  Error"));
        assert!(!output.contains("Status:"));
        assert!(output.ends_with("--------------\n"));
    }
}
