/// CredentialSource port for a forge token stored outside the command line
pub trait CredentialSource {
    /// Returns the stored token, or `None` if nothing is configured
    fn stored_token(&self) -> Option<String>;
}
