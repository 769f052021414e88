//! Built-in validators
//!
//! Standalone checks that do not need a rule chain, plus the format
//! predicates the chain builders share.
//!
//! - **Paths**: [`validate_file_path`]
//! - **Sizes**: [`validate_file_size`], [`format_file_size`]
//! - **Passwords**: [`validate_password_strength`]
//! - **Formats**: [`is_email`], [`is_username`]
//!
//! # Examples
//!
//! ```
//! use lyra_validator::validators::*;
//!
//! assert!(validate_file_path("/docs/report.pdf").valid);
//! assert_eq!(format_file_size(1536), "1.5KB");
//! assert!(validate_password_strength("StrongP@ssw0rd").valid);
//! ```

pub mod content;
pub mod password;
pub mod path;
pub mod size;

pub use content::{is_email, is_username};
pub use password::{
    MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS, PasswordCheck, PasswordStrength,
    validate_password_strength,
};
pub use path::{MAX_PATH_LENGTH, validate_file_path};
pub use size::{format_file_size, validate_file_size};
