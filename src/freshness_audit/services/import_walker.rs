use crate::freshness_audit::domain::{Dependency, DependencySet, ForgeIdentity, SkipReason};
use crate::ports::outbound::ImportSource;

/// Result of a walk besides the populated set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    pub skipped: Vec<SkipReason>,
}

impl WalkOutcome {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// ImportGraphWalker service for discovering forge-hosted dependencies
///
/// Performs a sequential depth-first descent over the static import graph.
/// Membership in the set does not prune descent: a module reached through
/// several parents is walked once per parent. Descent is cut only when a
/// module is already on the current path, which keeps cyclic graphs finite.
pub struct ImportGraphWalker<'a, S: ImportSource> {
    source: &'a S,
    forge: &'a ForgeIdentity,
}

struct WalkState<'s> {
    set: &'s mut DependencySet,
    path: Vec<String>,
    skipped: Vec<SkipReason>,
}

impl<'a, S: ImportSource> ImportGraphWalker<'a, S> {
    pub fn new(source: &'a S, forge: &'a ForgeIdentity) -> Self {
        Self { source, forge }
    }

    /// Walks the import graph below `module`, adding every forge-hosted import to `set`
    pub fn walk(&self, set: &mut DependencySet, module: &str) -> WalkOutcome {
        self.walk_with_progress(set, module, |_, _| {})
    }

    /// Same as [`walk`](Self::walk), calling `on_visit` with each module
    /// before its imports are read, together with the current set size.
    pub fn walk_with_progress<F>(&self, set: &mut DependencySet, module: &str, mut on_visit: F) -> WalkOutcome
    where
        F: FnMut(&str, usize),
    {
        let mut state = WalkState {
            set,
            path: Vec::new(),
            skipped: Vec::new(),
        };
        self.descend(module, &mut state, &mut on_visit);

        WalkOutcome {
            skipped: state.skipped,
        }
    }

    fn descend(&self, module: &str, state: &mut WalkState<'_>, on_visit: &mut dyn FnMut(&str, usize)) {
        on_visit(module, state.set.count());
        tracing::debug!(module, depth = state.path.len(), "scanning imports");

        let imports = match self.source.imports_of(module) {
            Ok(imports) => imports,
            Err(e) => {
                tracing::warn!(module, error = %e, "module import error");
                state.skipped.push(SkipReason::ModuleResolution {
                    module: module.to_string(),
                    details: e.to_string(),
                });
                return;
            }
        };

        state.path.push(module.to_string());

        for import in imports {
            if !self.forge.is_managed_by_forge(&import) {
                continue;
            }

            let dependency = match Dependency::new(self.forge, import.as_str(), module) {
                Ok(dependency) => dependency,
                Err(error) => {
                    tracing::warn!(module, %error, "skipping unresolvable import");
                    state.skipped.push(SkipReason::Malformed {
                        parent: module.to_string(),
                        error,
                    });
                    continue;
                }
            };
            state.set.add(dependency);

            if state.path.iter().any(|visiting| visiting == &import) {
                tracing::warn!(module = %import, "import cycle detected");
                state.skipped.push(SkipReason::CycleDetected {
                    module: import,
                    path: state.path.clone(),
                });
                continue;
            }

            self.descend(&import, state, on_visit);
        }

        state.path.pop();
    }
}
