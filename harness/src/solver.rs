use std::fmt;

/// One half of a puzzle: turns the raw input into an answer, or nothing.
pub trait Solver<T> {
    fn solve(&self, input: &str) -> Option<T>;
}

impl<T, F> Solver<T> for F
where
    F: Fn(&str) -> Option<T>,
{
    fn solve(&self, input: &str) -> Option<T> {
        self(input)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "🎄 Part One 🎄"),
            Part::Two => write!(f, "🎄 Part two 🎄"),
        }
    }
}
