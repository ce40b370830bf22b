// Paramcase demo harness: a Fibonacci suite driven by literal tuples.
// Usage: cargo run --bin fibonacci -- [filter] [--list] [--format json]

use std::process::ExitCode;

use paramcase::{assume, params, CaseResult, Parameterizer, Suite};

fn fibonacci(n: u32) -> u64 {
    let (mut current, mut next) = (0u64, 1u64);
    for _ in 0..n {
        (current, next) = (next, current + next);
    }
    current
}

#[derive(Default)]
struct FibonacciTest;

impl FibonacciTest {
    fn data() -> Vec<(u32, u64)> {
        params::with(0, 0)
            .and(1, 1)
            .and(2, 1)
            .and(3, 2)
            .and(4, 3)
            .and(5, 5)
            .and(6, 8)
            .build()
    }

    fn test(&mut self, input: u32, expected: u64) {
        assert_eq!(fibonacci(input), expected);
    }

    fn recurrence(&mut self, n: i64) -> CaseResult {
        assume(n >= 2, format!("recurrence needs n >= 2, got {}", n));
        let n = n as u32;
        paramcase::check_eq(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2))
    }
}

fn main() -> ExitCode {
    paramcase::cli::run(|| {
        let compute = Parameterizer::<FibonacciTest>::of()
            .run(FibonacciTest::test)
            .with(FibonacciTest::data);
        let recurrence = Parameterizer::<FibonacciTest>::of()
            .run(FibonacciTest::recurrence)
            .with(|| params::single(-1i64).and(1).and(2).and(10).and(30));
        Ok(vec![Suite::new("FibonacciTest")
            .register("compute", compute)?
            .register("recurrence", recurrence)?])
    })
}
