use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ImportSource port for reading a module's static import list
///
/// The walker only depends on this port, which keeps graph traversal
/// independent of where module sources live.
pub trait ImportSource {
    /// Returns the import paths declared by the module's source files
    ///
    /// # Arguments
    /// * `import_path` - Import path of the module to inspect
    ///
    /// # Errors
    /// Returns an error if the module cannot be located or its sources
    /// cannot be read.
    fn imports_of(&self, import_path: &str) -> Result<Vec<String>>;
}

/// ModuleLocator port for mapping import paths to directories on disk
pub trait ModuleLocator {
    /// Determines the import path of the module rooted at `project_dir`
    ///
    /// # Errors
    /// Returns an error if the directory does not declare a module and is
    /// not inside a known source root.
    fn root_module(&self, project_dir: &Path) -> Result<String>;

    /// Locates the source directory of a module, if it exists locally
    fn module_dir(&self, import_path: &str) -> Option<PathBuf>;
}
