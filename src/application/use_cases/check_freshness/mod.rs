use crate::application::dto::{AuditRequest, AuditSummary};
use crate::freshness_audit::domain::{Dependency, DependencySet, ForgeIdentity};
use crate::freshness_audit::services::{FreshnessReporter, ImportGraphWalker, WalkOutcome};
use crate::ports::inbound::FreshnessAuditPort;
use crate::ports::outbound::{
    ImportSource, LocalHistory, ModuleLocator, OutputPresenter, ProgressReporter, RemoteHistory,
    ReportFormatter,
};
use crate::shared::error::FreshnessError;
use crate::shared::Result;

/// CheckFreshnessUseCase - Core use case for the dependency freshness audit
///
/// This use case orchestrates the audit workflow using generic dependency
/// injection for the infrastructure it drives.
///
/// # Type Parameters
/// * `RES` - ImportSource + ModuleLocator implementation
/// * `LH` - LocalHistory implementation
/// * `RH` - RemoteHistory implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckFreshnessUseCase<RES, LH, RH, PR> {
    resolver: RES,
    reporter: FreshnessReporter<LH, RH>,
    progress_reporter: PR,
    formatter: Box<dyn ReportFormatter>,
    presenter: Box<dyn OutputPresenter>,
    forge: ForgeIdentity,
}

impl<RES, LH, RH, PR> CheckFreshnessUseCase<RES, LH, RH, PR>
where
    RES: ImportSource + ModuleLocator,
    LH: LocalHistory,
    RH: RemoteHistory,
    PR: ProgressReporter,
{
    /// Creates a new CheckFreshnessUseCase with injected dependencies
    pub fn new(
        resolver: RES,
        local_history: LH,
        remote_history: RH,
        progress_reporter: PR,
        formatter: Box<dyn ReportFormatter>,
        presenter: Box<dyn OutputPresenter>,
    ) -> Self {
        Self {
            resolver,
            reporter: FreshnessReporter::new(local_history, remote_history),
            progress_reporter,
            formatter,
            presenter,
            forge: ForgeIdentity::github(),
        }
    }

    /// Replaces the forge whose imports are audited (github.com by default)
    pub fn with_forge(mut self, forge: ForgeIdentity) -> Self {
        self.forge = forge;
        self
    }

    /// Resolves the import path of the module being audited
    fn resolve_root(&self, request: &AuditRequest) -> Result<String> {
        let root = self
            .resolver
            .root_module(&request.project_path)
            .map_err(|e| FreshnessError::RootModuleResolution {
                path: request.project_path.clone(),
                details: format!("{:#}", e),
            })?;

        self.progress_reporter
            .report(&format!("🔍 Scanning imports of {}", root));
        Ok(root)
    }

    /// Walks the import graph below `root`, reporting progress and skips
    fn collect_dependencies(&self, root: &str) -> (DependencySet, WalkOutcome) {
        let mut set = DependencySet::new();
        let walker = ImportGraphWalker::new(&self.resolver, &self.forge);
        let outcome = walker.walk_with_progress(&mut set, root, |module, discovered| {
            self.progress_reporter.report_scanning(module, discovered);
        });

        for skip in &outcome.skipped {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: skipped {}", skip));
        }

        (set, outcome)
    }

    /// Drops the root module and every dependency matching an exclusion pattern
    fn apply_exclusions(&self, set: &DependencySet, root: &str, request: &AuditRequest) -> DependencySet {
        let filtered = set.excluding(root).excluding_all(&request.exclude_patterns);

        let excluded = set.count().saturating_sub(filtered.count());
        if !request.exclude_patterns.is_empty() && excluded > 0 {
            tracing::debug!(excluded, "dependencies excluded by filters");
        }

        for pattern in &request.exclude_patterns {
            if !set.iter().any(|d| d.import_path().contains(pattern.as_str())) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                    pattern
                ));
            }
        }

        filtered
    }

    /// Checks each dependency in import-path order, presenting every block as it is produced
    fn check_all(&self, set: &DependencySet, request: &AuditRequest, summary: &mut AuditSummary) -> Result<()> {
        self.presenter
            .present(&self.formatter.format_header(set.count()))?;

        let mut dependencies: Vec<&Dependency> = set.iter().collect();
        dependencies.sort_by(|a, b| a.import_path().cmp(b.import_path()));

        for dependency in dependencies {
            let report = self.reporter.report(dependency, &request.token);
            summary.record(&report);
            self.presenter.present(&self.formatter.format_report(&report))?;
        }

        Ok(())
    }
}

impl<RES, LH, RH, PR> FreshnessAuditPort for CheckFreshnessUseCase<RES, LH, RH, PR>
where
    RES: ImportSource + ModuleLocator,
    LH: LocalHistory,
    RH: RemoteHistory,
    PR: ProgressReporter,
{
    fn audit(&self, request: AuditRequest) -> Result<AuditSummary> {
        // Step 1: Resolve the root module
        let root = self.resolve_root(&request)?;

        // Step 2: Walk the import graph
        let (set, outcome) = self.collect_dependencies(&root);

        // Step 3: Exclude the root and configured patterns
        let filtered = self.apply_exclusions(&set, &root, &request);

        // Step 4: Check and present every remaining dependency
        let mut summary = AuditSummary::new(root);
        summary.skipped = outcome.skipped;
        self.check_all(&filtered, &request, &mut summary)?;

        let mut completion = format!("✅ {}", summary);
        if !summary.skipped.is_empty() {
            completion.push_str(&format!(", {} import(s) skipped", summary.skipped.len()));
        }
        self.progress_reporter.report_completion(&completion);

        Ok(summary)
    }
}
