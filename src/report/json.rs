//! Machine-readable report.

use std::io::Write;

use serde::Serialize;

use super::ReportSink;
use crate::runner::{TestResult, TestSummary};
use crate::suite::Description;

/// The document written by [`JsonSink`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub results: &'a [TestResult],
    pub summary: TestSummary,
}

/// Buffers results and writes a single JSON document when the run ends.
pub struct JsonSink<W> {
    out: W,
    results: Vec<TestResult>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            results: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn test_started(&mut self, _description: &Description) {}

    fn test_finished(&mut self, _description: &Description, result: &TestResult) {
        self.results.push(result.clone());
    }

    fn run_finished(&mut self, summary: &TestSummary) {
        let report = JsonReport {
            results: &self.results,
            summary: *summary,
        };
        let written = serde_json::to_writer_pretty(&mut self.out, &report)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(err) = written {
            tracing::warn!(%err, "failed to write JSON report");
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn writes_results_and_summary() {
        let description = Description {
            suite: "Demo".to_string(),
            field: "check".to_string(),
            parameters: vec!["1".to_string()],
        };
        let results = [
            TestResult::Pass {
                suite: "Demo".to_string(),
                name: "check: (1)".to_string(),
            },
            TestResult::Fail {
                suite: "Demo".to_string(),
                name: "check: (2)".to_string(),
                error: "Demo::check: (2) failed: boom".to_string(),
                expected: None,
                actual: None,
            },
        ];
        let mut sink = JsonSink::new(Vec::new());
        let mut summary = TestSummary::default();
        for result in &results {
            summary.record(result);
            sink.test_finished(&description, result);
        }
        sink.run_finished(&summary);

        let doc: Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(doc["summary"]["passed"], 1);
        assert_eq!(doc["summary"]["failed"], 1);
        assert_eq!(doc["results"][0]["outcome"], "pass");
        assert_eq!(doc["results"][1]["outcome"], "fail");
        assert_eq!(doc["results"][1]["error"], "Demo::check: (2) failed: boom");
        assert!(doc["results"][1].get("expected").is_none());
    }
}
