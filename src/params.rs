//! Literal parameter tuples for parameterized tests.
//!
//! A [`ParameterSet`] is an ordered list of tuples written inline:
//!
//! ```rust
//! use paramcase::params;
//!
//! let tuples = params::with(0, 0).and(1, 1).and(2, 1).build();
//! assert_eq!(tuples, vec![(0, 0), (1, 1), (2, 1)]);
//! ```
//!
//! One-, two- and three-value tuples each have their own entry point
//! ([`single`], [`with`], [`with3`]) so the tuple shape is fixed by the first
//! call and every `and` must match it.

use std::fmt::Display;

/// A fixed-size group of test arguments that can render itself for test names.
pub trait ParameterTuple: Clone {
    /// Number of values in the tuple.
    const ARITY: usize;

    /// Renders each value with `Display`, in order.
    fn render(&self) -> Vec<String>;
}

impl<A> ParameterTuple for (A,)
where
    A: Display + Clone,
{
    const ARITY: usize = 1;

    fn render(&self) -> Vec<String> {
        vec![self.0.to_string()]
    }
}

impl<A, B> ParameterTuple for (A, B)
where
    A: Display + Clone,
    B: Display + Clone,
{
    const ARITY: usize = 2;

    fn render(&self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

impl<A, B, C> ParameterTuple for (A, B, C)
where
    A: Display + Clone,
    B: Display + Clone,
    C: Display + Clone,
{
    const ARITY: usize = 3;

    fn render(&self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string(), self.2.to_string()]
    }
}

/// Ordered, append-only collection of parameter tuples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet<P> {
    tuples: Vec<P>,
}

/// Starts a set of one-value tuples.
pub fn single<A>(first: A) -> ParameterSet<(A,)> {
    ParameterSet {
        tuples: vec![(first,)],
    }
}

/// Starts a set of pairs with `(first, second)`.
pub fn with<A, B>(first: A, second: B) -> ParameterSet<(A, B)> {
    ParameterSet {
        tuples: vec![(first, second)],
    }
}

/// Starts a set of triples with `(first, second, third)`.
pub fn with3<A, B, C>(first: A, second: B, third: C) -> ParameterSet<(A, B, C)> {
    ParameterSet {
        tuples: vec![(first, second, third)],
    }
}

impl<A> ParameterSet<(A,)> {
    /// Appends another one-value tuple.
    pub fn and(mut self, first: A) -> Self {
        self.tuples.push((first,));
        self
    }
}

impl<A, B> ParameterSet<(A, B)> {
    /// Appends another pair.
    pub fn and(mut self, first: A, second: B) -> Self {
        self.tuples.push((first, second));
        self
    }
}

impl<A, B, C> ParameterSet<(A, B, C)> {
    /// Appends another triple.
    pub fn and(mut self, first: A, second: B, third: C) -> Self {
        self.tuples.push((first, second, third));
        self
    }
}

impl<P> ParameterSet<P> {
    /// Finishes the set, returning the tuples in declaration order.
    pub fn build(self) -> Vec<P> {
        self.tuples
    }

    /// Number of tuples declared so far.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Always false for sets started with [`single`], [`with`] or [`with3`].
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}

impl<P> IntoIterator for ParameterSet<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.into_iter()
    }
}
