//! Prelude module for convenient imports.
//!
//! ```
//! use lyra_validator::prelude::*;
//!
//! let age = FieldValidator::<u32>::new().range(18, 100);
//! assert!(!age.validate(&15).valid);
//! ```

pub use crate::builder::{FieldValidator, ObjectValidator};
pub use crate::foundation::{
    FieldValue, NumericBound, ObjectValidationResult, ValidationError, ValidationResult,
    ValidationRule,
};
pub use crate::validators::{
    PasswordCheck, PasswordStrength, format_file_size, validate_file_path, validate_file_size,
    validate_password_strength,
};
