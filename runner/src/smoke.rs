// Input-agnostic solvers for checking a puzzle input and the harness end to end.

pub fn non_blank_lines(input: &str) -> Option<u64> {
    let count = input.lines().filter(|line| !line.trim().is_empty()).count() as u64;
    if count == 0 {
        return None;
    }
    Some(count)
}

pub fn sum_of_integers(input: &str) -> Option<u64> {
    let mut sum: Option<u64> = None;
    for token in input.split(|c: char| !c.is_ascii_digit()) {
        if token.is_empty() {
            continue;
        }
        // Tokens too large for u64 are skipped rather than wrapped.
        if let Ok(value) = token.parse::<u64>() {
            sum = Some(sum.unwrap_or(0).saturating_add(value));
        }
    }
    sum
}
