//! File size validation and formatting

use crate::foundation::{ValidationError, ValidationResult};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with base-1024 units and one decimal, e.g. `"10.0MB"`.
///
/// Sizes beyond the terabyte range stay in `TB`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{size:.1}{}", UNITS[unit])
}

/// Validates a file size in bytes against an optional upper limit.
///
/// Negative sizes always fail. When `max_size` is given, sizes strictly
/// greater than it fail with a message naming the limit in human units.
///
/// `Some(0)` is a real zero-byte limit; pass `None` for no limit. The web
/// console treats a limit of `0` as "no limit" instead.
///
/// # Examples
///
/// ```
/// use lyra_validator::validators::validate_file_size;
///
/// assert!(validate_file_size(512, Some(1024)).valid);
/// assert!(!validate_file_size(-1, None).valid);
///
/// let result = validate_file_size(2048, Some(1024));
/// assert_eq!(result.errors[0].message, "File size must not exceed 1.0KB");
/// ```
pub fn validate_file_size(size: i64, max_size: Option<u64>) -> ValidationResult {
    let mut errors = Vec::new();

    if size < 0 {
        errors.push(ValidationError::new("size_negative", "File size must not be negative"));
    }

    if let Some(max) = max_size
        && size > 0
        && size.unsigned_abs() > max
    {
        errors.push(
            ValidationError::new(
                "size_too_large",
                format!("File size must not exceed {}", format_file_size(max)),
            )
            .with_param("max", max.to_string())
            .with_param("actual", size.to_string()),
        );
    }

    ValidationResult::from_errors(errors)
}
