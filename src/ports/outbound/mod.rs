/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (Go workspace, git, forge API, console).
pub mod credential_source;
pub mod history;
pub mod module_resolver;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use credential_source::CredentialSource;
pub use history::{LocalHistory, RemoteHistory};
pub use module_resolver::{ImportSource, ModuleLocator};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
