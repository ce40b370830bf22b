//! Parameterized calls: one bound, executable invocation per tuple.

use std::fmt;
use std::sync::Arc;

use crate::outcome::{guard, CaseResult, IntoCaseResult, Outcome};
use crate::params::ParameterTuple;

/// Builds a fresh target instance for every call.
pub type Factory<T> = Arc<dyn Fn() -> T>;

/// A test method over target `T` taking the values of tuple `P`.
///
/// Implemented for every `Fn(&mut T, A[, B[, C]])` whose return type is `()`
/// or `Result<(), E>`, so plain methods such as `FibonacciTest::check` can be
/// passed directly. The tuple shape and the method signature must agree at
/// compile time.
pub trait TestMethod<T, P> {
    fn invoke(&self, target: &mut T, parameters: P) -> CaseResult;
}

impl<T, A, F, R> TestMethod<T, (A,)> for F
where
    F: Fn(&mut T, A) -> R,
    R: IntoCaseResult,
{
    fn invoke(&self, target: &mut T, (a,): (A,)) -> CaseResult {
        self(target, a).into_case_result()
    }
}

impl<T, A, B, F, R> TestMethod<T, (A, B)> for F
where
    F: Fn(&mut T, A, B) -> R,
    R: IntoCaseResult,
{
    fn invoke(&self, target: &mut T, (a, b): (A, B)) -> CaseResult {
        self(target, a, b).into_case_result()
    }
}

impl<T, A, B, C, F, R> TestMethod<T, (A, B, C)> for F
where
    F: Fn(&mut T, A, B, C) -> R,
    R: IntoCaseResult,
{
    fn invoke(&self, target: &mut T, (a, b, c): (A, B, C)) -> CaseResult {
        self(target, a, b, c).into_case_result()
    }
}

/// Type-erased view of a call, as seen by suites and runners.
pub trait Call: fmt::Debug {
    /// The tuple's values rendered for display.
    fn parameters(&self) -> Vec<String>;

    /// Instantiates the target and invokes the method with the tuple.
    fn execute(&self) -> Outcome;
}

/// One tuple bound to a method and a target factory.
pub struct ParameterizedCall<T, P, M> {
    factory: Factory<T>,
    tuple: P,
    method: Arc<M>,
}

impl<T, P, M> ParameterizedCall<T, P, M>
where
    P: ParameterTuple,
    M: TestMethod<T, P>,
{
    pub fn new(factory: Factory<T>, tuple: P, method: Arc<M>) -> Self {
        Self {
            factory,
            tuple,
            method,
        }
    }

    /// Runs the method against a new target instance.
    ///
    /// Construction happens inside the guard, so a panicking factory is
    /// reported as this call's failure.
    pub fn execute(&self) -> Outcome {
        guard(|| {
            let mut target = (self.factory)();
            self.method.invoke(&mut target, self.tuple.clone())
        })
    }
}

impl<T, P, M> Call for ParameterizedCall<T, P, M>
where
    P: ParameterTuple,
    M: TestMethod<T, P>,
{
    fn parameters(&self) -> Vec<String> {
        self.tuple.render()
    }

    fn execute(&self) -> Outcome {
        ParameterizedCall::execute(self)
    }
}

impl<T, P, M> fmt::Debug for ParameterizedCall<T, P, M>
where
    P: ParameterTuple,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterizedCall")
            .field("target", &std::any::type_name::<T>())
            .field("parameters", &self.tuple.render())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::diagnostics::CaseError;

    #[derive(Default)]
    struct Counter {
        hits: u32,
    }

    impl Counter {
        fn bump(&mut self, by: u32, expected: u32) {
            self.hits += by;
            assert_eq!(self.hits, expected);
        }
    }

    #[test]
    fn every_execution_gets_a_fresh_target() {
        let built = Rc::new(Cell::new(0));
        let counter = Rc::clone(&built);
        let factory: Factory<Counter> = Arc::new(move || {
            counter.set(counter.get() + 1);
            Counter::default()
        });
        let call = ParameterizedCall::new(factory, (2u32, 2u32), Arc::new(Counter::bump));

        assert!(call.execute().is_passed());
        assert!(call.execute().is_passed());
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn three_value_methods_receive_all_values() {
        let factory: Factory<()> = Arc::new(|| ());
        let method = |_: &mut (), a: i32, b: i32, sum: i32| -> CaseResult {
            if a + b == sum {
                Ok(())
            } else {
                Err(CaseError::failure(format!("{a} + {b} != {sum}")))
            }
        };
        let call = ParameterizedCall::new(factory, (1, 2, 4), Arc::new(method));
        assert_eq!(call.parameters(), vec!["1", "2", "4"]);
        assert!(call.execute().is_failed());
    }

    #[test]
    fn panicking_factory_fails_the_call() {
        let factory: Factory<Counter> = Arc::new(|| -> Counter { panic!("cannot build") });
        let call = ParameterizedCall::new(factory, (1u32, 1u32), Arc::new(Counter::bump));
        match call.execute() {
            Outcome::Failed(err) => assert_eq!(err.to_string(), "cannot build"),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
