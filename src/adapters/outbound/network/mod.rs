/// Network adapters for external API calls
mod github_client;

pub use github_client::{parse_branch_date, GitHubBranchClient};
