//! Executes suites one child at a time and reports each outcome.

use serde::Serialize;

use crate::diagnostics::{CaseError, SuiteError};
use crate::outcome::Outcome;
use crate::report::ReportSink;
use crate::suite::{ChildTest, Description, Suite};

/// Result of one child test, as handed to report sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TestResult {
    /// Test passed successfully
    Pass { suite: String, name: String },
    /// Test failed; `error` is decorated with the test's description
    Fail {
        suite: String,
        name: String,
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        expected: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        actual: Option<String>,
    },
    /// Test was skipped by an assumption or a filter
    Skipped {
        suite: String,
        name: String,
        reason: String,
    },
}

impl TestResult {
    pub fn from_outcome(description: &Description, outcome: Outcome) -> Self {
        let suite = description.suite.clone();
        let name = description.display_name();
        match outcome {
            Outcome::Passed => TestResult::Pass { suite, name },
            Outcome::Skipped(assumption) => TestResult::Skipped {
                suite,
                name,
                reason: assumption.message,
            },
            Outcome::Failed(err) => {
                let (expected, actual) = match &err {
                    CaseError::Mismatch { expected, actual } => {
                        (Some(expected.clone()), Some(actual.clone()))
                    }
                    _ => (None, None),
                };
                TestResult::Fail {
                    error: format!("{} failed: {}", description.qualified_name(), err),
                    suite,
                    name,
                    expected,
                    actual,
                }
            }
        }
    }

    pub fn suite(&self) -> &str {
        match self {
            TestResult::Pass { suite, .. }
            | TestResult::Fail { suite, .. }
            | TestResult::Skipped { suite, .. } => suite,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TestResult::Pass { name, .. }
            | TestResult::Fail { name, .. }
            | TestResult::Skipped { name, .. } => name,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass { .. })
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, TestResult::Fail { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TestResult::Skipped { .. })
    }
}

/// Test result summary for CLI reporting
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl TestSummary {
    pub fn record(&mut self, result: &TestResult) {
        match result {
            TestResult::Pass { .. } => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skipped { .. } => self.skipped += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total_tests(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Percentage of executed (non-skipped) tests that passed.
    pub fn success_rate(&self) -> f64 {
        let executed = self.passed + self.failed;
        if executed == 0 {
            return 0.0;
        }
        (self.passed as f64 / executed as f64) * 100.0
    }
}

/// Configuration for test execution and reporting.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Substring (case-insensitive) or exact name a test must match to run.
    pub filter: Option<String>,
    /// Match `filter` against the whole name instead of a substring.
    pub exact: bool,
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            filter: None,
            exact: false,
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

/// Helper for test skipping logic.
///
/// A filter matches either the display name or the suite-qualified name.
pub fn skip_reason(description: &Description, config: &RunConfig) -> Option<String> {
    let filter = config.filter.as_deref()?;
    let display = description.display_name();
    let qualified = description.qualified_name();
    let matched = if config.exact {
        display == filter || qualified == filter
    } else {
        qualified.to_lowercase().contains(&filter.to_lowercase())
    };
    if matched {
        None
    } else if config.exact {
        Some(format!("Filtered out by exact name: {}", filter))
    } else {
        Some(format!("Filtered out by substring: {}", filter))
    }
}

/// Runs child tests sequentially, in generation order.
#[derive(Debug, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Discovers every suite, then executes all children.
    ///
    /// Discovery finishes for all suites before the first child runs, so a
    /// broken parameter source stops the run without partial results.
    ///
    /// # Errors
    ///
    /// Returns the first [`SuiteError`] raised during discovery.
    pub fn run(
        &self,
        suites: &[Suite],
        sink: &mut dyn ReportSink,
    ) -> Result<TestSummary, SuiteError> {
        let mut children = Vec::new();
        for suite in suites {
            children.extend(suite.children()?);
        }
        Ok(self.run_children(&children, sink))
    }

    /// Executes already discovered children.
    pub fn run_children(&self, children: &[ChildTest], sink: &mut dyn ReportSink) -> TestSummary {
        let mut summary = TestSummary::default();
        for child in children {
            let result = self.run_child(child, sink);
            summary.record(&result);
        }
        tracing::info!(
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            "run finished"
        );
        sink.run_finished(&summary);
        summary
    }

    /// Executes one child and reports it.
    ///
    /// A filtered-out child is reported as skipped without a start event.
    pub fn run_child(&self, child: &ChildTest, sink: &mut dyn ReportSink) -> TestResult {
        let description = child.description();
        if let Some(reason) = skip_reason(description, &self.config) {
            let result = TestResult::Skipped {
                suite: description.suite.clone(),
                name: description.display_name(),
                reason,
            };
            sink.test_finished(description, &result);
            return result;
        }

        tracing::trace!(test = %description.qualified_name(), "started");
        sink.test_started(description);
        let result = TestResult::from_outcome(description, child.execute());
        tracing::trace!(test = %description.qualified_name(), passed = result.is_pass(), "finished");
        sink.test_finished(description, &result);
        result
    }
}
