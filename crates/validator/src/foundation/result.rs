//! Validation outcomes
//!
//! Outcomes are plain data: a form renders `errors` next to the input and
//! re-validates on the next keystroke.

use indexmap::IndexMap;
use serde::Serialize;

use super::ValidationError;

// ============================================================================
// FIELD RESULT
// ============================================================================

/// Outcome of validating a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// `true` iff no rule failed.
    pub valid: bool,
    /// Every failed rule, in rule order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Builds a result from the collected failures.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A passing result.
    #[must_use]
    pub fn ok() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Returns `true` iff no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Iterates over the failure messages, in rule order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_ref())
    }

    /// Returns `true` if some failure carries the given code.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// OBJECT RESULT
// ============================================================================

/// Outcome of validating a whole record.
///
/// `errors` is the flat list of every field failure in field registration
/// order; `field_errors` groups the same errors by field and only contains
/// fields that failed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectValidationResult {
    /// `true` iff every registered field passed.
    pub valid: bool,
    /// Every failure across all fields.
    pub errors: Vec<ValidationError>,
    /// Failures keyed by field name.
    pub field_errors: IndexMap<String, Vec<ValidationError>>,
}

impl ObjectValidationResult {
    /// Returns `true` iff every registered field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Iterates over the failure messages of all fields.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_ref())
    }

    /// Failure messages for one field; empty when the field passed.
    #[must_use]
    pub fn field_messages(&self, field: &str) -> Vec<&str> {
        self.field_errors
            .get(field)
            .map(|errors| errors.iter().map(|e| e.message.as_ref()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_iff_no_errors() {
        assert!(ValidationResult::ok().is_valid());
        let failed = ValidationResult::from_errors(vec![ValidationError::required()]);
        assert!(!failed.is_valid());
        assert_eq!(failed.messages().collect::<Vec<_>>(), ["This field is required"]);
        assert!(failed.has_code("required"));
    }

    #[test]
    fn object_result_serializes_camel_case() {
        let mut field_errors = IndexMap::new();
        field_errors.insert("name".to_string(), vec![ValidationError::required()]);
        let result = ObjectValidationResult {
            valid: false,
            errors: vec![ValidationError::required()],
            field_errors,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fieldErrors"]["name"][0]["code"], "required");
        assert_eq!(result.field_messages("name"), ["This field is required"]);
        assert!(result.field_messages("other").is_empty());
    }
}
