use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Outdated dependencies never change the exit code; only startup
/// failures and argument errors do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The audit ran to completion
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Fatal application error (working directory, root module, config)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal errors that abort the audit at startup.
#[derive(Debug, Error)]
pub enum FreshnessError {
    #[error("Cannot determine working directory\nDetails: {details}")]
    WorkingDirectory { details: String },

    #[error("Failed to resolve root module in: {path}\nDetails: {details}\n\n💡 Hint: Run inside a Go module (a directory with go.mod) or a package below $GOPATH/src")]
    RootModuleResolution { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Invalid config file: {path}\nReason: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Per-dependency failure to resolve one side of the timestamp pair.
///
/// These are displayed next to the dependency and never abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("local history unavailable: {details}")]
    LocalResolution { details: String },

    #[error("request failed: {details}")]
    RemoteTransport { details: String },

    #[error("branch not found (HTTP {status})")]
    RemoteNotFound { status: u16 },

    #[error("unexpected response body: {details}")]
    RemoteParse { details: String },

    #[error("invalid commit date '{value}'")]
    RemoteDateFormat { value: String },
}

impl TimestampError {
    pub fn local(details: impl Into<String>) -> Self {
        TimestampError::LocalResolution {
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_root_module_resolution_display() {
        let error = FreshnessError::RootModuleResolution {
            path: PathBuf::from("/work/project"),
            details: "go.mod not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to resolve root module"));
        assert!(display.contains("/work/project"));
        assert!(display.contains("go.mod not found"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = FreshnessError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("Directory does not exist"));
    }

    #[test]
    fn test_config_error_display() {
        let error = FreshnessError::Config {
            path: PathBuf::from("depfresh.config.yml"),
            reason: "timeout_secs must be greater than zero".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("depfresh.config.yml"));
        assert!(display.contains("timeout_secs"));
    }

    #[test]
    fn test_remote_not_found_carries_status() {
        let error = TimestampError::RemoteNotFound { status: 404 };
        assert_eq!(format!("{}", error), "branch not found (HTTP 404)");
    }

    #[test]
    fn test_local_constructor() {
        let error = TimestampError::local("git exited with status 128");
        assert_eq!(
            error,
            TimestampError::LocalResolution {
                details: "git exited with status 128".to_string()
            }
        );
    }
}
