//! Defines the command-line arguments of a paramcase test harness.
//!
//! This module uses the `clap` crate with its "derive" feature. The libtest
//! flags cargo forwards to test targets (`--nocapture`, `--test-threads`,
//! ...) are accepted as hidden no-ops, so options after them still parse.

use clap::{Args, Parser, ValueEnum};

use crate::runner::RunConfig;

/// The harness argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "paramcase",
    version,
    about = "Runs parameterized test suites, one reported test per parameter tuple.",
    ignore_errors = true
)]
pub struct HarnessArgs {
    /// Only run tests whose suite-qualified name contains this text.
    pub filter: Option<String>,

    /// Match the filter against whole test names instead of substrings.
    #[arg(long)]
    pub exact: bool,

    /// List test names without running them.
    #[arg(long)]
    pub list: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// When to color the pretty report.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(flatten)]
    pub libtest: LibtestFlags,
}

/// Libtest flags cargo forwards to test targets. Accepted and ignored.
#[derive(Debug, Default, Args)]
pub struct LibtestFlags {
    #[arg(long, hide = true)]
    pub nocapture: bool,

    #[arg(long, hide = true, value_name = "N")]
    pub test_threads: Option<String>,

    #[arg(long, hide = true)]
    pub show_output: bool,

    #[arg(short, long, hide = true)]
    pub quiet: bool,

    #[arg(long, hide = true)]
    pub include_ignored: bool,

    #[arg(long, hide = true)]
    pub ignored: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One colored line per test and a summary.
    Pretty,
    /// A single JSON document.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl HarnessArgs {
    pub fn run_config(&self) -> RunConfig {
        let use_colors = match self.color {
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        RunConfig {
            filter: self.filter.clone(),
            exact: self.exact,
            use_colors,
        }
    }
}
