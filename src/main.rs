mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use depfresh::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use depfresh::adapters::outbound::filesystem::GoPathResolver;
use depfresh::adapters::outbound::formatters::ConsoleFormatter;
use depfresh::adapters::outbound::git::{GitConfigCredentialSource, GitLogHistory};
use depfresh::adapters::outbound::network::GitHubBranchClient;
use depfresh::application::credentials::resolve_access_token;
use depfresh::application::dto::AuditRequest;
use depfresh::application::use_cases::CheckFreshnessUseCase;
use depfresh::ports::inbound::FreshnessAuditPort;
use depfresh::shared::error::{ExitCode, FreshnessError};
use depfresh::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir().map_err(|e| FreshnessError::WorkingDirectory {
        details: e.to_string(),
    })?;

    // Validate project directory
    let project_path = match args.path.as_deref() {
        Some(path) => working_dir.join(path),
        None => working_dir,
    };
    validate_project_path(&project_path)?;

    let config = load_config(args.config.as_deref(), &project_path)?;

    let token = resolve_access_token(args.token.as_deref(), &GitConfigCredentialSource::new());
    if token.is_anonymous() {
        tracing::debug!("no GitHub token configured; using anonymous requests");
    }

    let mut exclude_patterns = args.exclude;
    exclude_patterns.extend(config.exclude_packages().iter().cloned());

    // Create adapters (Dependency Injection)
    let resolver = GoPathResolver::from_env().with_project_dir(project_path.clone());
    tracing::debug!(gopath = ?resolver.gopath(), "resolved GOPATH");
    let local_history = GitLogHistory::new(resolver.clone());
    let remote_history = GitHubBranchClient::with_config(config.api_url(), config.timeout())?;
    let formatter = if std::io::stdout().is_terminal() {
        ConsoleFormatter::new()
    } else {
        ConsoleFormatter::plain()
    };

    // Create use case with injected dependencies
    let use_case = CheckFreshnessUseCase::new(
        resolver,
        local_history,
        remote_history,
        StderrProgressReporter::new(),
        Box::new(formatter),
        Box::new(StdoutPresenter::new()),
    );

    let request = AuditRequest::new(project_path, token, exclude_patterns);
    use_case.audit(request)?;

    Ok(())
}

/// Loads the explicit config file, or the one discovered in the project directory
fn load_config(explicit: Option<&str>, project_path: &Path) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(project_path)?,
    };
    Ok(config.unwrap_or_default())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(FreshnessError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(FreshnessError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    path.canonicalize()
        .map_err(|e| FreshnessError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_project_path(temp_dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let result = validate_project_path(&nonexistent_path);
        assert!(result.is_err());

        let err = result.unwrap_err();
        let err_string = format!("{}", err);
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("main.go");
        fs::write(&file_path, "package main").unwrap();

        let result = validate_project_path(&file_path);
        assert!(result.is_err());

        let err = result.unwrap_err();
        let err_string = format!("{}", err);
        assert!(err_string.contains("Not a directory"));
    }

    #[test]
    fn test_load_config_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(None, temp_dir.path()).unwrap();
        assert_eq!(config.api_url(), GitHubBranchClient::API_ENDPOINT);
        assert!(config.exclude_packages().is_empty());
    }

    #[test]
    fn test_load_config_explicit_path_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config(Some("/nonexistent/depfresh.yml"), temp_dir.path());
        assert!(result.is_err());
    }
}
