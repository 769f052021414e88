//! # lyra-validator
//!
//! Client-side input validation for the Lyra document console.
//!
//! ## Quick Start
//!
//! ```
//! use lyra_validator::prelude::*;
//!
//! let username = FieldValidator::<str>::new().required().min_length(3).username();
//! assert!(username.validate("alice").valid);
//!
//! let signup = ObjectValidator::new()
//!     .field("username", |f| f.min_length(3))
//!     .field("email", |f| f.email());
//! let result = signup.validate_value(&serde_json::json!({"username": "ab", "email": "bad"}));
//! assert_eq!(result.field_errors.len(), 2);
//! ```
//!
//! ## Behaviour
//!
//! - Every rule runs; failures are collected, never short-circuited.
//! - Invalid input is data ([`ValidationResult`](foundation::ValidationResult)),
//!   not an `Err` or a panic.
//! - Type-specific rules (length, format, range) pass on values of another
//!   runtime type.
//!
//! ## Modules
//!
//! - [`builder`]: [`FieldValidator`](builder::FieldValidator) and
//!   [`ObjectValidator`](builder::ObjectValidator)
//! - [`validators`]: file path, file size and password strength checks
//! - [`presets`]: user, file and folder form validators

pub mod builder;
pub mod foundation;
pub mod prelude;
pub mod presets;
pub mod validators;
