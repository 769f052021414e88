//! Ready-made record validators for the console's forms
//!
//! Field names match the JSON the backend exchanges (`displayName` is
//! camelCase), so DTOs serialized with `#[serde(rename_all = "camelCase")]`
//! can be passed straight to [`ObjectValidator::validate`].

use serde_json::Value;

use crate::builder::ObjectValidator;
use crate::validators::validate_file_path;

fn is_valid_path(value: &Value) -> bool {
    value.as_str().is_none_or(|path| validate_file_path(path).valid)
}

/// User profile form: `username`, `email`, `displayName`.
#[must_use]
pub fn user() -> ObjectValidator {
    ObjectValidator::new()
        .field("username", |f| {
            f.required()
                .with_message("Username is required")
                .min_length(3)
                .with_message("Username must be at least 3 characters")
                .max_length(50)
                .with_message("Username must be at most 50 characters")
                .username()
        })
        .field("email", |f| {
            f.required().with_message("Email is required").email()
        })
        .field("displayName", |f| {
            f.required()
                .with_message("Display name is required")
                .max_length(100)
                .with_message("Display name must be at most 100 characters")
        })
}

/// File metadata form: `name`, `path`, `size`.
#[must_use]
pub fn file() -> ObjectValidator {
    ObjectValidator::new()
        .field("name", |f| {
            f.required()
                .with_message("File name is required")
                .max_length(255)
                .with_message("File name must be at most 255 characters")
        })
        .field("path", |f| {
            f.required()
                .with_message("File path is required")
                .custom(is_valid_path, "File path is not valid")
        })
        .field("size", |f| {
            f.required()
                .with_message("File size is required")
                .custom(
                    |v: &Value| v.as_f64().is_none_or(|n| n >= 0.0),
                    "File size must not be negative",
                )
        })
}

/// Folder form: `name`, `path`, optional `description`.
#[must_use]
pub fn folder() -> ObjectValidator {
    ObjectValidator::new()
        .field("name", |f| {
            f.required()
                .with_message("Folder name is required")
                .max_length(255)
                .with_message("Folder name must be at most 255 characters")
        })
        .field("path", |f| {
            f.required()
                .with_message("Folder path is required")
                .custom(is_valid_path, "Folder path is not valid")
        })
        .field("description", |f| {
            f.max_length(500)
                .with_message("Folder description must be at most 500 characters")
        })
}
