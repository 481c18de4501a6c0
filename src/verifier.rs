//! Runs the registered checks in order and builds the report.

use crate::checks::{CheckContext, CheckRegistry};
use crate::config::VerifyConfig;
use crate::report::Report;
use crate::shell::ShellRunner;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Verifies one project against a configuration.
///
/// Every check runs exactly once, in registry order, regardless of how
/// earlier checks fared.
pub struct Verifier {
    project_root: PathBuf,
    config: VerifyConfig,
    registry: CheckRegistry,
    scratch_dir: PathBuf,
}

impl Verifier {
    /// Create a verifier with the built-in checks.
    pub fn new(project_root: &Path, config: VerifyConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            registry: CheckRegistry::with_builtins(),
            scratch_dir: std::env::temp_dir(),
        }
    }

    /// Use a different set of checks.
    pub fn with_registry(mut self, registry: CheckRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Write temporary probe files under `dir` instead of the system temp dir.
    pub fn with_scratch_dir(mut self, dir: &Path) -> Self {
        self.scratch_dir = dir.to_path_buf();
        self
    }

    /// The project being verified.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The effective configuration.
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// The checks that will run.
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Run every check and return the report.
    pub fn run(&self) -> Report {
        let runner = ShellRunner::from_config(&self.config);
        let ctx = CheckContext {
            project_root: &self.project_root,
            config: &self.config,
            runner: &runner,
            scratch_dir: &self.scratch_dir,
        };

        tracing::debug!(
            "Verifying {} with {} checks",
            self.project_root.display(),
            self.registry.len()
        );

        let mut report = Report::new(
            self.config.title.clone(),
            &self.project_root,
            self.config.install_commands.clone(),
        );

        for check in self.registry.iter() {
            let start = Instant::now();
            let outcome = check.check(&ctx);
            let result = report.record(check.id(), check.description(), outcome, start.elapsed());
            tracing::debug!(
                "Check {} ({}) {} in {:?}",
                result.index,
                result.id,
                if result.passed { "passed" } else { "failed" },
                result.duration
            );
        }

        tracing::info!("{}/{} checks passed", report.passed(), report.total());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckId, CheckOutcome, VerifyCheck};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    struct CountingCheck {
        id: &'static str,
        passes: bool,
        runs: Arc<AtomicUsize>,
    }

    impl VerifyCheck for CountingCheck {
        fn id(&self) -> CheckId {
            CheckId::new(self.id)
        }

        fn description(&self) -> &str {
            "Counting check"
        }

        fn check(&self, _ctx: &CheckContext<'_>) -> CheckOutcome {
            self.runs.fetch_add(1, Ordering::SeqCst);
            if self.passes {
                CheckOutcome::new(true, vec![])
            } else {
                CheckOutcome::failed("nope")
            }
        }
    }

    #[test]
    fn failures_do_not_short_circuit() {
        let temp = TempDir::new().unwrap();
        let runs = Arc::new(AtomicUsize::new(0));
        let mut registry = CheckRegistry::new();
        for (id, passes) in [("a", false), ("b", true), ("c", false), ("d", true)] {
            registry.register(Box::new(CountingCheck {
                id,
                passes,
                runs: Arc::clone(&runs),
            }));
        }

        let report = Verifier::new(temp.path(), VerifyConfig::default())
            .with_registry(registry)
            .run();

        assert_eq!(runs.load(Ordering::SeqCst), 4);
        assert_eq!(report.total(), 4);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn builtin_run_always_has_five_checks() {
        let temp = TempDir::new().unwrap();

        let report = Verifier::new(temp.path(), VerifyConfig::default())
            .with_scratch_dir(temp.path())
            .run();

        assert_eq!(report.total(), 5);
        assert!(report.passed() <= report.total());
        assert!(!report.all_passed());
    }

    #[test]
    fn report_carries_configured_title() {
        let temp = TempDir::new().unwrap();
        let config = VerifyConfig {
            title: "Widget".to_string(),
            ..Default::default()
        };

        let report = Verifier::new(temp.path(), config)
            .with_registry(CheckRegistry::new())
            .run();

        assert_eq!(report.title(), "Widget");
        assert!(report.all_passed());
    }
}
