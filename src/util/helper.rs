// src/util/helper.rs
use std::io::{self, IsTerminal, Write};

/// Parse a comma separated list of 1-based positions, e.g. "1,3".
/// Returns `None` if any entry is not a positive integer.
pub fn ensure_index_vector(input: &str) -> Option<Vec<usize>> {
    let mut positions = input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>().ok().filter(|n| *n > 0))
        .collect::<Option<Vec<_>>>()?;
    positions.sort();
    positions.dedup();
    Some(positions)
}

/// Interactive confirmation prompt
pub fn confirm(prompt: &str) -> bool {
    eprint!("{} (y/N): ", prompt);
    if io::stderr().flush().is_err() {
        return false;
    }

    let mut user_input = String::new();
    if io::stdin().read_line(&mut user_input).is_err() {
        return false;
    }

    matches!(user_input.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn is_stderr_piped() -> bool {
    !io::stderr().is_terminal()
}

/// Shorten `text` to at most `max` characters, appending an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1,3", Some(vec![1, 3]))]
    #[case(" 3, 1 ,3", Some(vec![1, 3]))]
    #[case("2", Some(vec![2]))]
    #[case("0", None)]
    #[case("a,1", None)]
    fn given_input_when_ensure_index_vector_then_parsed(
        #[case] input: &str,
        #[case] expected: Option<Vec<usize>>,
    ) {
        assert_eq!(ensure_index_vector(input), expected);
    }

    #[test]
    fn given_long_text_when_truncate_then_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 10), "a long ...");
    }
}
