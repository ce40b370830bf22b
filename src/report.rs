//! Report sinks: where runners send test events.
//!
//! - [`ConsoleSink`] prints colored PASS/FAIL/SKIP lines and a summary.
//! - [`JsonSink`] writes one JSON document once the run finishes.
//! - [`RecordingSink`] keeps every event in memory, for asserting on runs.

use crate::runner::{TestResult, TestSummary};
use crate::suite::Description;

mod console;
mod json;

pub use console::ConsoleSink;
pub use json::{JsonReport, JsonSink};

/// Receives the lifecycle of every child test.
///
/// For each executed child a sink sees `test_started` followed by exactly one
/// `test_finished`. Children skipped by a filter only produce
/// `test_finished`.
pub trait ReportSink {
    fn test_started(&mut self, description: &Description);

    fn test_finished(&mut self, description: &Description, result: &TestResult);

    fn run_finished(&mut self, _summary: &TestSummary) {}
}

/// A single reported event, keyed by the child's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(String),
    Passed(String),
    Failed { name: String, error: String },
    Skipped { name: String, reason: String },
    RunFinished(TestSummary),
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
    pub results: Vec<TestResult>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events that mention `name`, in order.
    pub fn events_for(&self, name: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| match event {
                Event::Started(n) | Event::Passed(n) => n == name,
                Event::Failed { name: n, .. } | Event::Skipped { name: n, .. } => n == name,
                Event::RunFinished(_) => false,
            })
            .collect()
    }

    pub fn started(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Started(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn test_started(&mut self, description: &Description) {
        self.events.push(Event::Started(description.display_name()));
    }

    fn test_finished(&mut self, _description: &Description, result: &TestResult) {
        let event = match result {
            TestResult::Pass { name, .. } => Event::Passed(name.clone()),
            TestResult::Fail { name, error, .. } => Event::Failed {
                name: name.clone(),
                error: error.clone(),
            },
            TestResult::Skipped { name, reason, .. } => Event::Skipped {
                name: name.clone(),
                reason: reason.clone(),
            },
        };
        self.events.push(event);
        self.results.push(result.clone());
    }

    fn run_finished(&mut self, summary: &TestSummary) {
        self.events.push(Event::RunFinished(*summary));
    }
}
