//! The paramcase harness entry point.
//!
//! A test target declared with `harness = false` (or any binary) hands its
//! suites to [`run`], which parses the command line, runs every child test,
//! and turns the summary into a process exit code:
//!
//! ```rust,no_run
//! use std::process::ExitCode;
//!
//! use paramcase::{params, Parameterizer, Suite};
//!
//! #[derive(Default)]
//! struct Doubling;
//!
//! impl Doubling {
//!     fn check(&mut self, input: i32, expected: i32) {
//!         assert_eq!(input * 2, expected);
//!     }
//! }
//!
//! fn main() -> ExitCode {
//!     paramcase::cli::run(|| {
//!         let doubled = Parameterizer::<Doubling>::of()
//!             .run(Doubling::check)
//!             .with(|| params::with(1, 2).and(2, 4));
//!         Ok(vec![Suite::new("Doubling").register("check", doubled)?])
//!     })
//! }
//! ```

use std::io::{self, Write};
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

use crate::diagnostics::{AssumptionViolated, SuiteError};
use crate::report::{ConsoleSink, JsonSink};
use crate::runner::{skip_reason, Runner, TestSummary};
use crate::suite::Suite;

pub mod args;

pub use args::{ColorMode, HarnessArgs, OutputFormat};

/// Exit code for configuration errors found during discovery.
const CONFIG_ERROR: u8 = 2;

/// Parses the command line, runs the declared suites, and reports.
///
/// Exits with success when nothing failed, failure when any test failed,
/// and code 2 when declaring or expanding the suites failed.
pub fn run<F>(declare: F) -> ExitCode
where
    F: FnOnce() -> Result<Vec<Suite>, SuiteError>,
{
    let args = HarnessArgs::parse();
    init_tracing();
    install_panic_hook();

    let choice = if args.run_config().use_colors {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    match declare().and_then(|suites| execute_to(&args, &suites, &mut stdout)) {
        Ok(summary) if summary.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(CONFIG_ERROR)
        }
    }
}

/// Runs or lists `suites` as `args` ask, writing the report to `out`.
///
/// # Errors
///
/// Returns the first [`SuiteError`] raised while expanding the suites.
pub fn execute_to<W: WriteColor>(
    args: &HarnessArgs,
    suites: &[Suite],
    out: W,
) -> Result<TestSummary, SuiteError> {
    let runner = Runner::new(args.run_config());
    if args.list {
        return list(&runner, suites, out);
    }
    match args.format {
        OutputFormat::Pretty => runner.run(suites, &mut ConsoleSink::new(out)),
        OutputFormat::Json => runner.run(suites, &mut JsonSink::new(out)),
    }
}

fn list<W: Write>(runner: &Runner, suites: &[Suite], mut out: W) -> Result<TestSummary, SuiteError> {
    let mut listed = 0;
    for suite in suites {
        for child in suite.children()? {
            if skip_reason(child.description(), runner.config()).is_some() {
                continue;
            }
            listed += 1;
            if let Err(err) = writeln!(out, "{}: test", child.description().qualified_name()) {
                tracing::warn!(%err, "failed to write test listing");
            }
        }
    }
    if let Err(err) = writeln!(out, "\n{} tests", listed) {
        tracing::warn!(%err, "failed to write test listing");
    }
    Ok(TestSummary::default())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Keeps assumption skips out of stderr; other panics still reach the
/// previous hook.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if info.payload().is::<AssumptionViolated>() {
            return;
        }
        previous(info);
    }));
}
