/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod freshness_audit_port;

pub use freshness_audit_port::FreshnessAuditPort;
