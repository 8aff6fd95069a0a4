pub mod access_token;
pub mod dependency;
pub mod dependency_set;
pub mod forge;
pub mod freshness;
pub mod skip_reason;

pub use access_token::AccessToken;
pub use dependency::Dependency;
pub use dependency_set::DependencySet;
pub use forge::{ForgeIdentity, IdentityError, GITHUB_HOST};
pub use freshness::{Freshness, FreshnessReport, TimestampResult};
pub use skip_reason::SkipReason;
