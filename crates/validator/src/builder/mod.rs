//! Fluent rule-chain builders
//!
//! - [`FieldValidator`] checks one value against an ordered rule chain.
//! - [`ObjectValidator`] composes field chains keyed by field name.

pub mod field;
pub mod object;

pub use field::FieldValidator;
pub use object::ObjectValidator;
