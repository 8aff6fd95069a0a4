use crate::shared::Result;

/// OutputPresenter port for presenting report output
///
/// The use case presents each block as soon as it is formatted, so a slow
/// remote call only delays the dependencies after it.
pub trait OutputPresenter {
    /// Presents formatted report content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
