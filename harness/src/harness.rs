use crate::solver::{Part, Solver};
use crate::verdict::Verdict;
use anyhow::{Context, Result};
use debugtimer::{DebugTimer, Elapsed};
use log::{debug, warn};
use std::fmt::Display;
use std::io::{self, Write};

/// A timed solver invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<T> {
    pub answer: Option<T>,
    pub elapsed: Elapsed,
}

/// Runs solvers against an input and reports to `out`.
pub struct Harness<W: Write> {
    out: W,
}

impl Harness<io::Stdout> {
    pub fn stdout() -> Self {
        Harness::new(io::stdout())
    }
}

impl<W: Write> Harness<W> {
    pub fn new(out: W) -> Self {
        Harness { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run<T, S>(&mut self, input: &str, solver: S) -> Result<Run<T>>
    where
        T: Display,
        S: Solver<T>,
    {
        let timer = DebugTimer::start();
        let answer = solver.solve(input);
        let elapsed = timer.elapsed();
        debug!("Solver returned after {:?}", elapsed.as_duration());

        let written = match &answer {
            Some(value) => write!(self.out, "Result: {} ", value),
            None => write!(self.out, "No result "),
        };
        written.context("Failed to write result")?;
        writeln!(self.out, "(Time elapsed: {})", elapsed).context("Failed to write elapsed time")?;
        self.out.flush().context("Failed to flush output")?;

        Ok(Run { answer, elapsed })
    }

    pub fn run_all<T, A, B>(&mut self, input: &str, part_one: A, part_two: B) -> Result<(Run<T>, Run<T>)>
    where
        T: Display,
        A: Solver<T>,
        B: Solver<T>,
    {
        self.header(Part::One)?;
        let one = self.run(input, part_one)?;
        self.header(Part::Two)?;
        let two = self.run(input, part_two)?;
        Ok((one, two))
    }

    pub fn run_test<T, S>(&mut self, input: &str, solver: S, expected: Option<T>) -> Result<Verdict<T>>
    where
        T: Display + PartialEq,
        S: Solver<T>,
    {
        let verdict = Verdict::compare(solver.solve(input), expected);
        if verdict.passed() {
            debug!("Answer matches expectation");
        } else {
            warn!("Answer does not match expectation");
        }

        writeln!(self.out, "{}", verdict).context("Failed to write test verdict")?;
        self.out.flush().context("Failed to flush output")?;
        Ok(verdict)
    }

    pub fn run_test_all<T, A, B>(
        &mut self,
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
        self.header(Part::One)?;
        let one = self.run_test(input, part_one, expected_one)?;
        self.header(Part::Two)?;
        let two = self.run_test(input, part_two, expected_two)?;
        Ok((one, two))
    }

    fn header(&mut self, part: Part) -> Result<()> {
        debug!("Starting {:?}", part);
        writeln!(self.out, "{}", part).context(format!("Failed to write header for {:?}", part))
    }
}
