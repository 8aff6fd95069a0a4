use crate::freshness_audit::domain::AccessToken;
use std::path::PathBuf;

/// AuditRequest - Request DTO for the freshness audit use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Directory of the module whose dependencies are audited
    pub project_path: PathBuf,
    /// Forge credential, possibly anonymous
    pub token: AccessToken,
    /// Substrings; dependencies whose import path contains one are not checked
    pub exclude_patterns: Vec<String>,
}

impl AuditRequest {
    pub fn new(project_path: PathBuf, token: AccessToken, exclude_patterns: Vec<String>) -> Self {
        Self {
            project_path,
            token,
            exclude_patterns,
        }
    }
}
