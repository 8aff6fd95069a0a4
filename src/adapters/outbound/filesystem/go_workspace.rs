use super::import_scanner::scan_package_imports;
use crate::ports::outbound::{ImportSource, ModuleLocator};
use crate::shared::Result;
use anyhow::Context;
use regex::Regex;
use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static MODULE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*module\s+"?([^\s"]+)"?"#).expect("module directive pattern")
});

/// Reads the module path declared by `<dir>/go.mod`, if the file exists
fn read_module_directive(dir: &Path) -> Result<Option<String>> {
    let go_mod = dir.join("go.mod");
    if !go_mod.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&go_mod)
        .with_context(|| format!("Failed to read {}", go_mod.display()))?;

    let module = MODULE_DIRECTIVE
        .captures(&content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| anyhow::anyhow!("{} has no module directive", go_mod.display()))?;

    Ok(Some(module))
}

/// Joins an import path onto a directory, one path segment at a time
fn join_import_path(base: &Path, import_path: &str) -> PathBuf {
    import_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |dir, segment| dir.join(segment))
}

/// GoPathResolver adapter locating Go packages on the local filesystem
///
/// This adapter implements both ImportSource and ModuleLocator ports.
/// Packages of the project's own module resolve below the project
/// directory; every other import path resolves to `<GOPATH entry>/src/<path>`,
/// searched in GOPATH order.
#[derive(Debug, Clone)]
pub struct GoPathResolver {
    gopath: Vec<PathBuf>,
    project_dir: Option<PathBuf>,
    project_module: OnceCell<Option<String>>,
}

impl GoPathResolver {
    pub fn new(gopath: Vec<PathBuf>) -> Self {
        Self {
            gopath,
            project_dir: None,
            project_module: OnceCell::new(),
        }
    }

    /// Builds a resolver from `$GOPATH`, falling back to `$HOME/go`
    pub fn from_env() -> Self {
        let gopath: Vec<PathBuf> = std::env::var_os("GOPATH")
            .map(|value| std::env::split_paths(&value).collect())
            .unwrap_or_default();

        let gopath = if gopath.is_empty() {
            dirs::home_dir()
                .map(|home| vec![home.join("go")])
                .unwrap_or_default()
        } else {
            gopath
        };

        Self::new(gopath)
    }

    /// Maps the packages of the module rooted at `project_dir` to that directory
    pub fn with_project_dir(mut self, project_dir: PathBuf) -> Self {
        self.project_dir = Some(project_dir);
        self.project_module = OnceCell::new();
        self
    }

    pub fn gopath(&self) -> &[PathBuf] {
        &self.gopath
    }

    fn source_roots(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.gopath.iter().map(|entry| entry.join("src"))
    }

    /// Module path declared by the project's go.mod, read once
    fn project_module(&self) -> Option<&str> {
        self.project_module
            .get_or_init(|| {
                let dir = self.project_dir.as_deref()?;
                match read_module_directive(dir) {
                    Ok(module) => module,
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable go.mod");
                        None
                    }
                }
            })
            .as_deref()
    }

    /// Resolves imports inside the project's own module
    fn project_package_dir(&self, import_path: &str) -> Option<PathBuf> {
        let project_dir = self.project_dir.as_deref()?;
        let module = self.project_module()?;

        if import_path == module {
            return Some(project_dir.to_path_buf());
        }
        let rest = import_path.strip_prefix(module)?.strip_prefix('/')?;
        Some(join_import_path(project_dir, rest))
    }
}

impl ModuleLocator for GoPathResolver {
    fn root_module(&self, project_dir: &Path) -> Result<String> {
        if let Some(module) = read_module_directive(project_dir)? {
            return Ok(module);
        }

        let canonical = project_dir
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize {}", project_dir.display()))?;

        for src in self.source_roots() {
            let Ok(src) = src.canonicalize() else {
                continue;
            };
            if let Ok(relative) = canonical.strip_prefix(&src) {
                let segments: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                if !segments.is_empty() {
                    return Ok(segments.join("/"));
                }
            }
        }

        anyhow::bail!(
            "no go.mod in {} and the directory is not below any GOPATH src directory ({})",
            project_dir.display(),
            self.gopath
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn module_dir(&self, import_path: &str) -> Option<PathBuf> {
        if let Some(dir) = self.project_package_dir(import_path) {
            if dir.is_dir() {
                return Some(dir);
            }
        }

        self.source_roots()
            .map(|src| join_import_path(&src, import_path))
            .find(|candidate| candidate.is_dir())
    }
}

impl ImportSource for GoPathResolver {
    fn imports_of(&self, import_path: &str) -> Result<Vec<String>> {
        let dir = self
            .module_dir(import_path)
            .ok_or_else(|| anyhow::anyhow!("cannot find package \"{}\" in GOPATH", import_path))?;
        scan_package_imports(&dir)
    }
}
