use crate::freshness_audit::domain::AccessToken;
use crate::ports::outbound::CredentialSource;

/// Resolves the forge token once at startup
///
/// An explicit, non-blank token wins; otherwise the stored token is used;
/// otherwise requests are anonymous.
pub fn resolve_access_token<C: CredentialSource>(explicit: Option<&str>, source: &C) -> AccessToken {
    if let Some(token) = explicit.map(AccessToken::new) {
        if !token.is_anonymous() {
            return token;
        }
    }

    source
        .stored_token()
        .map(AccessToken::new)
        .unwrap_or_else(AccessToken::anonymous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StoredToken {
        token: Option<&'static str>,
        lookups: Cell<usize>,
    }

    impl StoredToken {
        fn new(token: Option<&'static str>) -> Self {
            Self {
                token,
                lookups: Cell::new(0),
            }
        }
    }

    impl CredentialSource for StoredToken {
        fn stored_token(&self) -> Option<String> {
            self.lookups.set(self.lookups.get() + 1);
            self.token.map(String::from)
        }
    }

    #[test]
    fn test_explicit_token_wins() {
        let source = StoredToken::new(Some("from-git-config"));
        let token = resolve_access_token(Some("from-flag"), &source);
        assert_eq!(token.as_str(), "from-flag");
        assert_eq!(source.lookups.get(), 0);
    }

    #[test]
    fn test_falls_back_to_stored_token() {
        let source = StoredToken::new(Some("from-git-config\n"));
        assert_eq!(resolve_access_token(None, &source).as_str(), "from-git-config");
        assert_eq!(resolve_access_token(Some(""), &source).as_str(), "from-git-config");
    }

    #[test]
    fn test_anonymous_when_nothing_configured() {
        let source = StoredToken::new(None);
        assert!(resolve_access_token(None, &source).is_anonymous());
    }
}
