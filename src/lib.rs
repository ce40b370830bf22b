//! Paramcase: declare one test method, drive it with a list of parameter
//! tuples, and get one independently reported test per tuple.
//!
//! ```rust
//! use paramcase::{params, Parameterizer, RecordingSink, Runner, Suite};
//!
//! #[derive(Default)]
//! struct FibonacciTest;
//!
//! impl FibonacciTest {
//!     fn check(&mut self, input: u32, expected: u64) {
//!         let (mut a, mut b) = (0u64, 1u64);
//!         for _ in 0..input {
//!             (a, b) = (b, a + b);
//!         }
//!         assert_eq!(a, expected);
//!     }
//! }
//!
//! let compute = Parameterizer::<FibonacciTest>::of()
//!     .run(FibonacciTest::check)
//!     .with(|| params::with(0, 0).and(1, 1).and(2, 1).and(6, 8));
//! let suite = Suite::new("FibonacciTest").register("compute", compute).unwrap();
//!
//! let mut sink = RecordingSink::new();
//! let summary = Runner::default().run(&[suite], &mut sink).unwrap();
//! assert_eq!(summary.passed, 4);
//! assert_eq!(sink.started()[3], "compute: (6,8)");
//! ```

pub use crate::diagnostics::{AssumptionViolated, CaseError, SourceError, SuiteError};
pub use crate::outcome::{assume, check_eq, CaseResult, Outcome};
pub use crate::parameterizer::{NeedsSource, Parameterized, Parameterizer};
pub use crate::params::{ParameterSet, ParameterTuple};
pub use crate::report::{ConsoleSink, Event, JsonSink, RecordingSink, ReportSink};
pub use crate::runner::{RunConfig, Runner, TestResult, TestSummary};
pub use crate::suite::{ChildTest, Description, Suite};

pub mod call;
pub mod cli;
pub mod diagnostics;
pub mod outcome;
pub mod parameterizer;
pub mod params;
pub mod report;
pub mod runner;
pub mod source;
pub mod suite;
