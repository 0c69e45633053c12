//! Times two-part puzzle solvers and checks their answers.
//!
//! Every report goes to a [`Harness`] sink. The free functions below use
//! standard output.
mod harness;
mod input;
mod solver;
mod verdict;

#[cfg(test)]
#[path = "tests/harness_tests.rs"]
mod harness_tests;

pub use crate::harness::{Harness, Run};
pub use crate::input::load_input;
pub use crate::solver::{Part, Solver};
pub use crate::verdict::Verdict;
pub use debugtimer::Elapsed;

use anyhow::Result;
use std::fmt::Display;

pub fn run<T: Display, S: Solver<T>>(input: &str, solver: S) -> Result<Run<T>> {
    Harness::stdout().run(input, solver)
}

pub fn run_all<T, A, B>(input: &str, part_one: A, part_two: B) -> Result<(Run<T>, Run<T>)>
where
    T: Display,
    A: Solver<T>,
    B: Solver<T>,
{
    Harness::stdout().run_all(input, part_one, part_two)
}

pub fn run_test<T, S>(input: &str, solver: S, expected: Option<T>) -> Result<Verdict<T>>
where
    T: Display + PartialEq,
    S: Solver<T>,
{
    Harness::stdout().run_test(input, solver, expected)
}

pub fn run_test_all<T, A, B>(
    input: &str,
    part_one: A,
    part_two: B,
    expected_one: Option<T>,
    expected_two: Option<T>,
) -> Result<(Verdict<T>, Verdict<T>)>
where
    T: Display + PartialEq,
    A: Solver<T>,
    B: Solver<T>,
{
    Harness::stdout().run_test_all(input, part_one, part_two, expected_one, expected_two)
}
