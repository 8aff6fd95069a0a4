use std::collections::HashMap;
use std::path::{Path, PathBuf};
use depfresh::prelude::*;

/// Mock import graph serving both ImportSource and ModuleLocator
pub struct MockImportGraph {
    pub root: Option<String>,
    pub imports: HashMap<String, Vec<String>>,
}

impl MockImportGraph {
    pub fn new(root: &str) -> Self {
        Self {
            root: Some(root.to_string()),
            imports: HashMap::new(),
        }
    }

    pub fn without_root() -> Self {
        Self {
            root: None,
            imports: HashMap::new(),
        }
    }

    pub fn with_module(mut self, module: &str, imports: &[&str]) -> Self {
        self.imports.insert(
            module.to_string(),
            imports.iter().map(|i| i.to_string()).collect(),
        );
        self
    }
}

impl ImportSource for MockImportGraph {
    fn imports_of(&self, import_path: &str) -> Result<Vec<String>> {
        match self.imports.get(import_path) {
            Some(imports) => Ok(imports.clone()),
            None => anyhow::bail!("cannot find package \"{}\" in GOPATH", import_path),
        }
    }
}

impl ModuleLocator for MockImportGraph {
    fn root_module(&self, project_dir: &Path) -> Result<String> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => anyhow::bail!("no go.mod in {}", project_dir.display()),
        }
    }

    fn module_dir(&self, import_path: &str) -> Option<PathBuf> {
        self.imports
            .contains_key(import_path)
            .then(|| PathBuf::from("/gopath/src").join(import_path))
    }
}
