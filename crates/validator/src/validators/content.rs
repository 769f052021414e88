//! String format checks shared by the rule builders
//!
//! Patterns are ASCII-only on purpose: they mirror what the console's
//! account forms accept.

use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static USERNAME_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Returns `true` for `local@domain.tld` shaped addresses.
#[must_use]
pub fn is_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Returns `true` when the input only holds ASCII letters, digits, `_` and `-`.
#[must_use]
pub fn is_username(input: &str) -> bool {
    USERNAME_REGEX.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("test@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("invalid-email", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@example.c", false)]
    fn test_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_email(input), expected);
    }

    #[rstest]
    #[case("test_user-123", true)]
    #[case("test@user", false)]
    #[case("with space", false)]
    #[case("", false)]
    #[case("\u{e9}t\u{e9}", false)]
    fn test_username(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_username(input), expected);
    }
}
