//! Password strength scoring
//!
//! Strength is advisory (shown as a meter while typing); `valid` is what
//! gates submission and requires every check to pass.

use std::fmt;

use serde::Serialize;

use crate::foundation::{ValidationError, ValidationResult};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols that satisfy the "special character" check.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Coarse strength classification derived from the number of passing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// Two or fewer checks pass.
    Weak,
    /// Three or four checks pass.
    Medium,
    /// All five checks pass.
    Strong,
}

impl PasswordStrength {
    /// Maps a score (number of passing checks, 0-5) to a strength.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// Lowercase name, as shown to users.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`validate_password_strength`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordCheck {
    /// `true` only when every check passes.
    pub valid: bool,
    /// One error per failing check.
    pub errors: Vec<ValidationError>,
    /// Number of passing checks, 0-5.
    pub score: u8,
    /// Classification of `score`.
    pub strength: PasswordStrength,
}

impl PasswordCheck {
    /// Drops the strength information.
    #[must_use]
    pub fn into_result(self) -> ValidationResult {
        ValidationResult::from_errors(self.errors)
    }
}

/// Scores a password against five independent checks.
///
/// # Examples
///
/// ```
/// use lyra_validator::validators::{PasswordStrength, validate_password_strength};
///
/// let check = validate_password_strength("Medium123");
/// assert_eq!(check.strength, PasswordStrength::Medium);
/// assert!(!check.valid); // no symbol
/// ```
pub fn validate_password_strength(password: &str) -> PasswordCheck {
    let checks: [(bool, &'static str, &'static str); 5] = [
        (
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            "password_length",
            "Password must be at least 8 characters",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "password_lowercase",
            "Password must contain a lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "password_uppercase",
            "Password must contain an uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "password_digit",
            "Password must contain a digit",
        ),
        (
            password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
            "password_symbol",
            "Password must contain a special character",
        ),
    ];

    let mut errors = Vec::new();
    let mut score = 0_u8;
    for (passed, code, message) in checks {
        if passed {
            score += 1;
        } else {
            errors.push(ValidationError::new(code, message));
        }
    }

    PasswordCheck {
        valid: errors.is_empty(),
        errors,
        score,
        strength: PasswordStrength::from_score(score),
    }
}
