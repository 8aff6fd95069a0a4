use super::Dependency;
use std::collections::HashMap;

/// DependencySet aggregate keyed by import path
///
/// Insertion is idempotent: the first dependency seen for an import path
/// wins and later ones are discarded. Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    entries: HashMap<String, Dependency>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the dependency unless its import path is already present
    pub fn add(&mut self, dependency: Dependency) {
        self.entries
            .entry(dependency.import_path().to_string())
            .or_insert(dependency);
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, import_path: &str) -> bool {
        self.entries.contains_key(import_path)
    }

    pub fn get(&self, import_path: &str) -> Option<&Dependency> {
        self.entries.get(import_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.entries.values()
    }

    /// Returns a new set without the entries whose import path contains `pattern`
    pub fn excluding(&self, pattern: &str) -> DependencySet {
        let mut filtered = DependencySet::new();
        for dependency in self.iter() {
            if !dependency.import_path().contains(pattern) {
                filtered.add(dependency.clone());
            }
        }
        filtered
    }

    /// Applies `excluding` for every pattern in turn
    pub fn excluding_all<S: AsRef<str>>(&self, patterns: &[S]) -> DependencySet {
        patterns
            .iter()
            .fold(self.clone(), |set, pattern| set.excluding(pattern.as_ref()))
    }
}

impl<'a> IntoIterator for &'a DependencySet {
    type Item = &'a Dependency;
    type IntoIter = std::collections::hash_map::Values<'a, String, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
