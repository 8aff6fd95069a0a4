//! depfresh - dependency freshness auditor for Go projects
//!
//! This library walks the static import graph of a Go module, collects every
//! GitHub-hosted dependency it reaches, and compares the last commit of each
//! local checkout with the head of the repository's default branch on GitHub.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`freshness_audit`): Dependency model, classification and graph walking
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Go workspace, git, GitHub API and console implementations
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use depfresh::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let project = PathBuf::from(".");
//! let resolver = GoPathResolver::from_env().with_project_dir(project.clone());
//! let local_history = GitLogHistory::new(resolver.clone());
//! let remote_history = GitHubBranchClient::new()?;
//!
//! let use_case = CheckFreshnessUseCase::new(
//!     resolver,
//!     local_history,
//!     remote_history,
//!     StderrProgressReporter::new(),
//!     Box::new(ConsoleFormatter::plain()),
//!     Box::new(StdoutPresenter::new()),
//! );
//!
//! let summary = use_case.audit(AuditRequest::new(project, AccessToken::anonymous(), vec![]))?;
//! eprintln!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod freshness_audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::GoPathResolver;
    pub use crate::adapters::outbound::formatters::ConsoleFormatter;
    pub use crate::adapters::outbound::git::{GitConfigCredentialSource, GitLogHistory};
    pub use crate::adapters::outbound::network::GitHubBranchClient;
    pub use crate::application::dto::{AuditRequest, AuditSummary};
    pub use crate::application::use_cases::CheckFreshnessUseCase;
    pub use crate::freshness_audit::domain::{
        AccessToken, Dependency, DependencySet, ForgeIdentity, Freshness, FreshnessReport,
        SkipReason,
    };
    pub use crate::freshness_audit::services::{FreshnessReporter, ImportGraphWalker};
    pub use crate::ports::inbound::FreshnessAuditPort;
    pub use crate::ports::outbound::{
        ImportSource, LocalHistory, ModuleLocator, OutputPresenter, ProgressReporter,
        RemoteHistory, ReportFormatter,
    };
    pub use crate::shared::Result;
}
