/// Git adapters for local commit history and stored credentials
mod command;
mod config_credentials;
mod log_history;

pub use config_credentials::GitConfigCredentialSource;
pub use log_history::{parse_git_date, GitLogHistory, GIT_DATE_LAYOUT};
