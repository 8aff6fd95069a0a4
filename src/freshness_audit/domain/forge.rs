use thiserror::Error;

/// Host prefix of import paths served by GitHub
pub const GITHUB_HOST: &str = "github.com";

/// Reasons an import identifier cannot be mapped to a forge repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("'{identifier}' is not hosted on {host}")]
    NotForgeHosted { identifier: String, host: String },

    #[error("'{identifier}' does not have the form host/account/repository")]
    MalformedIdentifier { identifier: String },
}

/// ForgeIdentity resolves import identifiers to `(account, repository)` pairs
///
/// This is pure string logic with no I/O. The host test is a literal prefix
/// match on the identifier, and the account and repository are the second
/// and third `/`-separated segments, returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeIdentity {
    host: String,
}

impl ForgeIdentity {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn github() -> Self {
        Self::new(GITHUB_HOST)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns true if the identifier begins with the forge host prefix
    pub fn is_managed_by_forge(&self, identifier: &str) -> bool {
        identifier.starts_with(&self.host)
    }

    /// Extracts the owning account and repository name from an identifier
    ///
    /// # Errors
    /// - `NotForgeHosted` if the identifier lacks the host prefix
    /// - `MalformedIdentifier` if fewer than three segments are present
    pub fn resolve<'a>(&self, identifier: &'a str) -> Result<(&'a str, &'a str), IdentityError> {
        if !self.is_managed_by_forge(identifier) {
            return Err(IdentityError::NotForgeHosted {
                identifier: identifier.to_string(),
                host: self.host.clone(),
            });
        }

        let mut parts = identifier.split('/');
        let _host = parts.next();
        match (parts.next(), parts.next()) {
            (Some(account), Some(repository)) => Ok((account, repository)),
            _ => Err(IdentityError::MalformedIdentifier {
                identifier: identifier.to_string(),
            }),
        }
    }
}

impl Default for ForgeIdentity {
    fn default() -> Self {
        Self::github()
    }
}
