use super::IdentityError;

/// An import the walker did not follow, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The import looked forge-hosted but could not be resolved to a repository
    Malformed { parent: String, error: IdentityError },
    /// The module's import list could not be read
    ModuleResolution { module: String, details: String },
    /// The module is already on the current descent path
    CycleDetected { module: String, path: Vec<String> },
}

impl SkipReason {
    pub fn module(&self) -> &str {
        match self {
            SkipReason::Malformed { error, .. } => match error {
                IdentityError::NotForgeHosted { identifier, .. }
                | IdentityError::MalformedIdentifier { identifier } => identifier,
            },
            SkipReason::ModuleResolution { module, .. } | SkipReason::CycleDetected { module, .. } => {
                module
            }
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Malformed { parent, error } => {
                write!(f, "{} (imported by {})", error, parent)
            }
            SkipReason::ModuleResolution { module, details } => {
                write!(f, "cannot read imports of '{}': {}", module, details)
            }
            SkipReason::CycleDetected { module, path } => {
                write!(f, "import cycle: {} -> {}", path.join(" -> "), module)
            }
        }
    }
}
