use std::fmt;

/// Outcome of checking a solver's answer against a reference answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict<T> {
    /// The answer matches the expected value.
    Equal { result: T, expected: T },
    /// Both are present but differ.
    Differ { result: T, expected: T },
    /// An answer was produced where none was expected.
    Unexpected { result: T },
    /// No answer was produced but one was expected.
    Missing { expected: T },
    /// Neither side has a value.
    BothAbsent,
}

impl<T: PartialEq> Verdict<T> {
    pub fn compare(result: Option<T>, expected: Option<T>) -> Self {
        match (result, expected) {
            (Some(result), Some(expected)) if result == expected => Verdict::Equal { result, expected },
            (Some(result), Some(expected)) => Verdict::Differ { result, expected },
            (Some(result), None) => Verdict::Unexpected { result },
            (None, Some(expected)) => Verdict::Missing { expected },
            (None, None) => Verdict::BothAbsent,
        }
    }
}

impl<T> Verdict<T> {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Equal { .. } | Verdict::BothAbsent)
    }
}

impl<T: fmt::Display> fmt::Display for Verdict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Equal { result, expected } => write!(f, "Test passed: {} == {}", result, expected),
            Verdict::Differ { result, expected } => write!(f, "Test failed: {} != {}", result, expected),
            Verdict::Unexpected { result } => write!(f, "Test failed: {} != no result", result),
            Verdict::Missing { expected } => write!(f, "Test failed: no result != {}", expected),
            Verdict::BothAbsent => write!(f, "Test passed: no result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_covers_every_case() {
        assert_eq!(Verdict::compare(Some(42u64), Some(42)).to_string(), "Test passed: 42 == 42");
        assert_eq!(Verdict::compare(Some(42u64), Some(7)).to_string(), "Test failed: 42 != 7");
        assert_eq!(Verdict::compare(Some(5u64), None).to_string(), "Test failed: 5 != no result");
        assert_eq!(Verdict::compare(None, Some(9u64)).to_string(), "Test failed: no result != 9");
        assert_eq!(Verdict::<u64>::compare(None, None).to_string(), "Test passed: no result");
    }

    #[test]
    fn only_matching_outcomes_pass() {
        assert!(Verdict::compare(Some(1u64), Some(1)).passed());
        assert!(Verdict::<u64>::compare(None, None).passed());
        assert!(!Verdict::compare(Some(1u64), Some(2)).passed());
        assert!(!Verdict::compare(Some(1u64), None).passed());
        assert!(!Verdict::compare(None, Some(1u64)).passed());
    }

    #[test]
    fn works_for_non_numeric_answers() {
        let verdict = Verdict::compare(Some("ABC".to_string()), Some("ABD".to_string()));
        assert_eq!(verdict.to_string(), "Test failed: ABC != ABD");
    }
}
