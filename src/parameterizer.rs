//! Declaring a parameterized test: target, method, and parameter source.
//!
//! A declaration is built in three typed steps:
//!
//! ```rust
//! use paramcase::{params, Parameterizer};
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
//! let doubled = Parameterizer::<Doubling>::of()
//!     .run(Doubling::check)
//!     .with(|| params::with(1, 2).and(2, 4));
//! assert_eq!(doubled.generate_calls().unwrap().len(), 2);
//! ```
//!
//! The tuple type produced by the source selects which [`TestMethod`] arity
//! applies, so a mismatch between data and method is a compile error.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::call::{Call, Factory, ParameterizedCall, TestMethod};
use crate::diagnostics::SourceError;
use crate::outcome::panic_message;
use crate::params::ParameterTuple;

/// First step: knows how to build the target type.
pub struct Parameterizer<T> {
    factory: Factory<T>,
}

impl<T> Parameterizer<T>
where
    T: Default + 'static,
{
    /// Targets `T`, building each instance with `T::default()`.
    pub fn of() -> Self {
        Self {
            factory: Arc::new(T::default),
        }
    }
}

impl<T: 'static> Parameterizer<T> {
    /// Targets `T`, building each instance with `factory`.
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Binds the test method.
    pub fn run<M>(self, method: M) -> NeedsSource<T, M> {
        NeedsSource {
            factory: self.factory,
            method: Arc::new(method),
        }
    }
}

/// Second step: knows the target and the method, waits for data.
pub struct NeedsSource<T, M> {
    factory: Factory<T>,
    method: Arc<M>,
}

impl<T: 'static, M: 'static> NeedsSource<T, M> {
    /// Completes the declaration with an infallible source.
    ///
    /// The source is called each time calls are generated, not here.
    pub fn with<P, S, I>(self, source: S) -> Parameterized
    where
        M: TestMethod<T, P>,
        P: ParameterTuple + 'static,
        S: Fn() -> I + 'static,
        I: IntoIterator<Item = P>,
    {
        self.try_with(move || Ok::<I, SourceError>(source()))
    }

    /// Completes the declaration with a source that may fail, such as a
    /// YAML file. A failure aborts discovery of the whole suite.
    pub fn try_with<P, S, I, E>(self, source: S) -> Parameterized
    where
        M: TestMethod<T, P>,
        P: ParameterTuple + 'static,
        S: Fn() -> Result<I, E> + 'static,
        I: IntoIterator<Item = P>,
        E: Into<SourceError>,
    {
        let collect = move || -> Result<Vec<P>, SourceError> {
            let tuples = source().map_err(Into::<SourceError>::into)?;
            Ok(tuples.into_iter().collect())
        };
        Parameterized {
            expander: Box::new(Expander {
                factory: self.factory,
                method: self.method,
                source: Box::new(collect),
            }),
        }
    }
}

pub(crate) trait CallExpander {
    fn target_type(&self) -> &'static str;

    fn generate_calls(&self) -> Result<Vec<Box<dyn Call>>, SourceError>;
}

struct Expander<T, P, M> {
    factory: Factory<T>,
    method: Arc<M>,
    source: Box<dyn Fn() -> Result<Vec<P>, SourceError>>,
}

impl<T, P, M> CallExpander for Expander<T, P, M>
where
    T: 'static,
    P: ParameterTuple + 'static,
    M: TestMethod<T, P> + 'static,
{
    fn target_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn generate_calls(&self) -> Result<Vec<Box<dyn Call>>, SourceError> {
        let tuples = match panic::catch_unwind(AssertUnwindSafe(|| (self.source)())) {
            Ok(tuples) => tuples?,
            Err(payload) => return Err(SourceError::Panicked(panic_message(&*payload))),
        };
        Ok(tuples
            .into_iter()
            .map(|tuple| {
                Box::new(ParameterizedCall::new(
                    Arc::clone(&self.factory),
                    tuple,
                    Arc::clone(&self.method),
                )) as Box<dyn Call>
            })
            .collect())
    }
}

/// A complete parameterized declaration, ready to register in a suite.
pub struct Parameterized {
    expander: Box<dyn CallExpander>,
}

impl Parameterized {
    /// Calls the source and returns one call per tuple, in source order.
    pub fn generate_calls(&self) -> Result<Vec<Box<dyn Call>>, SourceError> {
        self.expander.generate_calls()
    }

    pub fn target_type(&self) -> &'static str {
        self.expander.target_type()
    }
}

impl fmt::Debug for Parameterized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameterized")
            .field("target", &self.target_type())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::params;

    #[derive(Default)]
    struct Squares;

    impl Squares {
        fn check(&mut self, n: i64, square: i64) {
            assert_eq!(n * n, square);
        }
    }

    #[test]
    fn one_call_per_tuple_in_order() {
        let declared = Parameterizer::<Squares>::of()
            .run(Squares::check)
            .with(|| params::with(3, 9).and(1, 1).and(2, 4));
        let calls = declared.generate_calls().unwrap();
        let rendered: Vec<Vec<String>> = calls.iter().map(|c| c.parameters()).collect();
        assert_eq!(rendered, vec![vec!["3", "9"], vec!["1", "1"], vec!["2", "4"]]);
        assert!(calls.iter().all(|c| c.execute().is_passed()));
    }

    #[test]
    fn source_is_called_per_generation() {
        let calls_made = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls_made);
        let declared = Parameterizer::<Squares>::of()
            .run(Squares::check)
            .with(move || {
                seen.set(seen.get() + 1);
                vec![(seen.get(), seen.get() * seen.get())]
            });
        assert_eq!(calls_made.get(), 0);
        declared.generate_calls().unwrap();
        let second = declared.generate_calls().unwrap();
        assert_eq!(calls_made.get(), 2);
        assert_eq!(second[0].parameters(), vec!["2", "4"]);
    }

    #[test]
    fn factory_builds_configured_targets() {
        struct Offset(i32);
        let declared = Parameterizer::with_factory(|| Offset(10))
            .run(|target: &mut Offset, value: i32| assert_eq!(target.0 + value, 15))
            .with(|| params::single(5).and(6));
        let outcomes: Vec<bool> = declared
            .generate_calls()
            .unwrap()
            .iter()
            .map(|c| c.execute().is_passed())
            .collect();
        assert_eq!(outcomes, vec![true, false]);
    }

    #[test]
    fn failing_source_reports_its_error() {
        let declared = Parameterizer::<Squares>::of()
            .run(Squares::check)
            .try_with(|| Err::<Vec<(i64, i64)>, _>("database offline"));
        let err = declared.generate_calls().unwrap_err();
        assert!(matches!(err, SourceError::Custom(ref m) if m == "database offline"));
    }

    #[test]
    fn panicking_source_is_caught() {
        let declared = Parameterizer::<Squares>::of()
            .run(Squares::check)
            .with(|| -> Vec<(i64, i64)> { panic!("no fixtures") });
        let err = declared.generate_calls().unwrap_err();
        assert!(matches!(err, SourceError::Panicked(ref m) if m == "no fixtures"));
    }
}
