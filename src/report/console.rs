//! Colored console report.

use std::io::{self, Write};

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::ReportSink;
use crate::runner::{TestResult, TestSummary};
use crate::suite::Description;

/// Prints one line per finished test and a summary at the end.
pub struct ConsoleSink<W> {
    out: W,
    failed: Vec<String>,
}

impl ConsoleSink<StandardStream> {
    pub fn stdout(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            failed: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn tag(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_result(&mut self, result: &TestResult) -> io::Result<()> {
        match result {
            TestResult::Pass { suite, name } => {
                self.tag("PASS", Color::Green)?;
                writeln!(self.out, ": {} [{}]", name, suite)
            }
            TestResult::Skipped {
                suite,
                name,
                reason,
            } => {
                self.tag("SKIP", Color::Yellow)?;
                writeln!(self.out, ": {} [{}] ({})", name, suite, reason)
            }
            TestResult::Fail {
                suite,
                name,
                error,
                expected,
                actual,
            } => {
                self.tag("FAIL", Color::Red)?;
                writeln!(self.out, ": {} [{}]", name, suite)?;
                writeln!(self.out, "  Error: {}", error)?;
                if let (Some(expected), Some(actual)) = (expected, actual) {
                    writeln!(self.out, "  Diff:")?;
                    self.write_diff(expected, actual)?;
                }
                Ok(())
            }
        }
    }

    fn write_diff(&mut self, expected: &str, actual: &str) -> io::Result<()> {
        let changeset = Changeset::new(expected, actual, "\n");
        for diff in &changeset.diffs {
            let (marker, color, text) = match diff {
                Difference::Same(text) => (' ', None, text),
                Difference::Rem(text) => ('-', Some(Color::Green), text),
                Difference::Add(text) => ('+', Some(Color::Red), text),
            };
            match color {
                Some(color) => self.out.set_color(ColorSpec::new().set_fg(Some(color)))?,
                None => self.out.reset()?,
            }
            for line in text.lines() {
                writeln!(self.out, "    {} {}", marker, line)?;
            }
        }
        self.out.reset()
    }

    fn write_summary(&mut self, summary: &TestSummary) -> io::Result<()> {
        write!(self.out, "\nTest summary: total {}, ", summary.total_tests())?;
        self.tag("passed", Color::Green)?;
        write!(self.out, " {}, ", summary.passed)?;
        self.tag("failed", Color::Red)?;
        write!(self.out, " {}, ", summary.failed)?;
        self.tag("skipped", Color::Yellow)?;
        writeln!(self.out, " {}", summary.skipped)?;

        if !self.failed.is_empty() {
            writeln!(self.out, "\nFailed tests:")?;
            for name in &self.failed {
                writeln!(self.out, "  - {}", name)?;
            }
        }
        self.out.flush()
    }
}

impl<W: WriteColor> ReportSink for ConsoleSink<W> {
    fn test_started(&mut self, _description: &Description) {}

    fn test_finished(&mut self, description: &Description, result: &TestResult) {
        if result.is_fail() {
            self.failed.push(description.qualified_name());
        }
        if let Err(err) = self.write_result(result) {
            tracing::warn!(%err, "failed to write test result");
        }
    }

    fn run_finished(&mut self, summary: &TestSummary) {
        if let Err(err) = self.write_summary(summary) {
            tracing::warn!(%err, "failed to write test summary");
        }
    }
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::*;

    fn description() -> Description {
        Description {
            suite: "FibonacciTest".to_string(),
            field: "compute".to_string(),
            parameters: vec!["6".to_string(), "8".to_string()],
        }
    }

    fn render(results: &[TestResult]) -> String {
        let mut sink = ConsoleSink::new(NoColor::new(Vec::new()));
        let mut summary = TestSummary::default();
        for result in results {
            summary.record(result);
            sink.test_finished(&description(), result);
        }
        sink.run_finished(&summary);
        String::from_utf8(sink.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn prints_pass_and_summary() {
        let out = render(&[TestResult::Pass {
            suite: "FibonacciTest".to_string(),
            name: "compute: (6,8)".to_string(),
        }]);
        assert!(out.starts_with("PASS: compute: (6,8) [FibonacciTest]\n"));
        assert!(out.contains("Test summary: total 1, passed 1, failed 0, skipped 0"));
        assert!(!out.contains("Failed tests:"));
    }

    #[test]
    fn prints_failure_with_diff() {
        let out = render(&[TestResult::Fail {
            suite: "FibonacciTest".to_string(),
            name: "compute: (6,8)".to_string(),
            error: "FibonacciTest::compute: (6,8) failed: expected 8, got 13".to_string(),
            expected: Some("8".to_string()),
            actual: Some("13".to_string()),
        }]);
        assert!(out.contains("FAIL: compute: (6,8) [FibonacciTest]"));
        assert!(out.contains("  Error: FibonacciTest::compute: (6,8) failed"));
        assert!(out.contains("    - 8\n"));
        assert!(out.contains("    + 13\n"));
        assert!(out.contains("Failed tests:\n  - FibonacciTest::compute: (6,8)\n"));
    }

    #[test]
    fn prints_skip_reason() {
        let out = render(&[TestResult::Skipped {
            suite: "FibonacciTest".to_string(),
            name: "compute: (6,8)".to_string(),
            reason: "negative input".to_string(),
        }]);
        assert!(out.starts_with("SKIP: compute: (6,8) [FibonacciTest] (negative input)\n"));
    }
}
