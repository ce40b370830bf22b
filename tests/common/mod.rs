//! # Shared fixtures for paramcase integration tests
//!
//! Target types and declarations reused across test files.

#![allow(dead_code)]

use paramcase::{params, CaseError, CaseResult, Parameterized, Parameterizer};

pub fn fibonacci(n: u32) -> u64 {
    let (mut current, mut next) = (0u64, 1u64);
    for _ in 0..n {
        (current, next) = (next, current + next);
    }
    current
}

#[derive(Default)]
pub struct FibonacciTest;

impl FibonacciTest {
    pub fn data() -> Vec<(u32, u64)> {
        params::with(0, 0)
            .and(1, 1)
            .and(2, 1)
            .and(3, 2)
            .and(4, 3)
            .and(5, 5)
            .and(6, 8)
            .build()
    }

    pub fn test(&mut self, input: u32, expected: u64) {
        assert_eq!(fibonacci(input), expected);
    }
}

/// The classic declaration: seven tuples, all passing.
pub fn compute() -> Parameterized {
    Parameterizer::<FibonacciTest>::of()
        .run(FibonacciTest::test)
        .with(FibonacciTest::data)
}

/// Target whose method fails, skips, or passes depending on the input.
#[derive(Default)]
pub struct Mixed;

impl Mixed {
    pub fn check(&mut self, label: &'static str, value: i32) -> CaseResult {
        match label {
            "panic" => panic!("exploded on {}", value),
            "error" => Err(CaseError::failure(format!("rejected {}", value))),
            "skip" => Err(CaseError::assumption(format!("not applicable to {}", value))),
            _ => Ok(()),
        }
    }
}

/// `ok`, `panic`, `ok`, `error`, `skip`, `ok`, in that order.
pub fn mixed() -> Parameterized {
    Parameterizer::<Mixed>::of().run(Mixed::check).with(|| {
        params::with("ok", 1)
            .and("panic", 2)
            .and("ok", 3)
            .and("error", 4)
            .and("skip", 5)
            .and("ok", 6)
    })
}
