//! File path validation
//!
//! Paths come from upload and rename dialogs and end up on storage backends
//! that may be Windows hosts, so the checks are the union of the usual
//! portability rules.

use std::sync::LazyLock;

use crate::foundation::{ValidationError, ValidationResult};

/// Maximum accepted path length, in characters.
pub const MAX_PATH_LENGTH: usize = 1000;

static RESERVED_NAME_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)^(CON|PRN|AUX|NUL|COM[1-9]|LPT[1-9])$").unwrap()
});

const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

fn is_forbidden(c: char) -> bool {
    ('\0'..='\x1f').contains(&c) || FORBIDDEN_CHARS.contains(&c)
}

/// Validates a user supplied file or folder path.
///
/// An empty or whitespace-only path fails with a single error. Every other
/// violation accumulates: overall length, forbidden characters, reserved
/// device names and segments starting or ending with a dot (other than `.`
/// and `..`). Segments are split on both `/` and `\`.
///
/// # Examples
///
/// ```
/// use lyra_validator::validators::validate_file_path;
///
/// assert!(validate_file_path("/valid/path/file.txt").valid);
/// assert!(!validate_file_path("/path/with<invalid>chars").valid);
/// assert!(!validate_file_path("/path/CON/file.txt").valid);
/// ```
pub fn validate_file_path(path: &str) -> ValidationResult {
    if path.trim().is_empty() {
        return ValidationResult::from_errors(vec![ValidationError::new(
            "path_empty",
            "File path must not be empty",
        )]);
    }

    let mut errors = Vec::new();

    let length = path.chars().count();
    if length > MAX_PATH_LENGTH {
        errors.push(
            ValidationError::new(
                "path_too_long",
                format!("File path must not exceed {MAX_PATH_LENGTH} characters"),
            )
            .with_param("max", MAX_PATH_LENGTH.to_string())
            .with_param("actual", length.to_string()),
        );
    }

    if path.chars().any(is_forbidden) {
        errors.push(ValidationError::new(
            "path_invalid_chars",
            "File path contains invalid characters",
        ));
    }

    for segment in path.split(['/', '\\']) {
        if segment.trim().is_empty() {
            continue;
        }

        if RESERVED_NAME_REGEX.is_match(segment) {
            errors.push(
                ValidationError::new(
                    "path_reserved_name",
                    format!("File path contains a reserved name: {segment}"),
                )
                .with_param("segment", segment.to_string()),
            );
        }

        if segment != "." && segment != ".." && (segment.starts_with('.') || segment.ends_with('.'))
        {
            errors.push(
                ValidationError::new(
                    "path_dot_segment",
                    format!("File names must not start or end with a dot: {segment}"),
                )
                .with_param("segment", segment.to_string()),
            );
        }
    }

    ValidationResult::from_errors(errors)
}
