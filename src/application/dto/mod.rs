/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_request;
mod audit_summary;

pub use audit_request::AuditRequest;
pub use audit_summary::AuditSummary;
