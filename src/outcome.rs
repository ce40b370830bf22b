//! Outcome of a single parameterized call, and the helpers test methods use
//! to produce one.

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use crate::diagnostics::{AssumptionViolated, CaseError};

pub type CaseResult = Result<(), CaseError>;

/// Return values a test method may produce.
pub trait IntoCaseResult {
    fn into_case_result(self) -> CaseResult;
}

impl IntoCaseResult for () {
    fn into_case_result(self) -> CaseResult {
        Ok(())
    }
}

impl<E> IntoCaseResult for Result<(), E>
where
    E: Into<CaseError>,
{
    fn into_case_result(self) -> CaseResult {
        self.map_err(Into::into)
    }
}

/// How one call ended.
#[derive(Debug)]
pub enum Outcome {
    Passed,
    Failed(CaseError),
    Skipped(AssumptionViolated),
}

impl Outcome {
    pub fn from_result(result: CaseResult) -> Self {
        match result {
            Ok(()) => Outcome::Passed,
            Err(CaseError::Assumption(assumption)) => Outcome::Skipped(assumption),
            Err(err) => Outcome::Failed(err),
        }
    }

    /// Classifies a caught panic; an [`AssumptionViolated`] payload is a skip.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<AssumptionViolated>() {
            Ok(assumption) => Outcome::Skipped(*assumption),
            Err(payload) => Outcome::Failed(CaseError::failure(panic_message(&*payload))),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Runs `body` and turns whatever it does into an [`Outcome`].
///
/// Panics never escape: assertion panics become failures and
/// [`assume`] panics become skips.
pub fn guard<F, R>(body: F) -> Outcome
where
    F: FnOnce() -> R,
    R: IntoCaseResult,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(result) => Outcome::from_result(result.into_case_result()),
        Err(payload) => Outcome::from_panic(payload),
    }
}

/// Skips the current case unless `condition` holds.
///
/// Works from test methods that return `()`: the violation unwinds to the
/// call boundary, where it is reported as a skip rather than a failure.
pub fn assume(condition: bool, message: impl Into<String>) {
    if !condition {
        panic::panic_any(AssumptionViolated::new(message));
    }
}

/// Compares two values, returning a [`CaseError::Mismatch`] when they differ.
pub fn check_eq<T>(expected: T, actual: T) -> CaseResult
where
    T: PartialEq + Debug,
{
    if expected == actual {
        return Ok(());
    }
    Err(CaseError::Mismatch {
        expected: format!("{:#?}", expected),
        actual: format!("{:#?}", actual),
    })
}

/// Skips the current case unless the condition holds.
///
/// ```rust,should_panic
/// paramcase::assume!(1 + 1 == 3);
/// ```
#[macro_export]
macro_rules! assume {
    ($cond:expr $(,)?) => {
        $crate::outcome::assume($cond, stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::outcome::assume($cond, format!($($arg)+))
    };
}
