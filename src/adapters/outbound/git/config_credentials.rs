use super::command::run_git;
use crate::ports::outbound::CredentialSource;

/// Git config key holding the GitHub token
pub const TOKEN_CONFIG_KEY: &str = "github.token";

/// GitConfigCredentialSource adapter reading `git config --global github.token`
///
/// A missing key, or git itself being unavailable, yields no token.
#[derive(Debug, Clone, Default)]
pub struct GitConfigCredentialSource;

impl GitConfigCredentialSource {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for GitConfigCredentialSource {
    fn stored_token(&self) -> Option<String> {
        match run_git(&["config", "--global", TOKEN_CONFIG_KEY], None) {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "no token in git config");
                None
            }
        }
    }
}
