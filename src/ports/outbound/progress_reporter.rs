/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so it never interleaves with the report written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that the import walk has reached a module
    ///
    /// # Arguments
    /// * `module` - Import path of the module being scanned
    /// * `discovered` - Number of forge-hosted dependencies found so far
    fn report_scanning(&self, module: &str, discovered: usize);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
