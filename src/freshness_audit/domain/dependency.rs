use super::forge::{ForgeIdentity, IdentityError};

/// Dependency value object representing one forge-hosted module
///
/// The account and repository are derived from the import path when the
/// dependency is constructed and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    import_path: String,
    parent: String,
    account: String,
    repository: String,
}

impl Dependency {
    /// Creates a dependency discovered while walking `parent`'s imports
    ///
    /// # Errors
    /// Returns an `IdentityError` if the import path is not forge-hosted
    /// or has fewer than three segments.
    pub fn new(
        forge: &ForgeIdentity,
        import_path: impl Into<String>,
        parent: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let import_path = import_path.into();
        let (account, repository) = forge.resolve(&import_path)?;
        let (account, repository) = (account.to_string(), repository.to_string());

        Ok(Self {
            import_path,
            parent: parent.into(),
            account,
            repository,
        })
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// The module that first imported this dependency
    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.import_path)
    }
}
