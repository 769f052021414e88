//! Core validation types
//!
//! This module contains the building blocks every validator is made of:
//!
//! - **Errors**: [`ValidationError`], one per failed rule
//! - **Results**: [`ValidationResult`], [`ObjectValidationResult`]
//! - **Rules**: [`ValidationRule`], a predicate plus its failure error
//! - **Values**: [`FieldValue`], the runtime view rules use to decide
//!   whether they apply
//!
//! # Examples
//!
//! ```
//! use lyra_validator::foundation::{ValidationError, ValidationRule};
//!
//! let positive =
//!     ValidationRule::<i64>::new(|n| *n > 0, ValidationError::custom("must be positive"));
//! assert!(positive.evaluate(&-1).is_some());
//! ```

pub mod error;
pub mod result;
pub mod rule;
pub mod value;

pub use error::ValidationError;
pub use result::{ObjectValidationResult, ValidationResult};
pub use rule::ValidationRule;
pub use value::{FieldValue, NumericBound};
