/// Filesystem adapters for locating and scanning Go packages
mod go_workspace;
mod import_scanner;

pub use go_workspace::GoPathResolver;
pub use import_scanner::{scan_imports_in_source, scan_package_imports};
