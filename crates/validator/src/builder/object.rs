//! Whole-record validation composed from per-field chains
//!
//! Records are inspected through their JSON form, so any `Serialize` type
//! (or a raw [`serde_json::Value`]) can be validated without derive macros.
//! A field missing from the record is seen as `null`.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::FieldValidator;
use crate::foundation::{ObjectValidationResult, ValidationError};

/// Rule chains keyed by field name, evaluated in registration order.
///
/// Fields without a registered chain are never checked and cannot fail.
///
/// # Examples
///
/// ```
/// use lyra_validator::builder::ObjectValidator;
/// use serde_json::json;
///
/// let validator = ObjectValidator::new()
///     .field("username", |f| f.required().min_length(3).username())
///     .field("email", |f| f.required().email())
///     .field("age", |f| f.required().range(18, 100));
///
/// let result = validator.validate_value(&json!({
///     "username": "ab",
///     "email": "invalid-email",
///     "age": 15,
/// }));
///
/// assert!(!result.valid);
/// assert_eq!(result.field_errors.len(), 3);
/// assert_eq!(result.field_messages("age"), ["Value must be between 18 and 100"]);
/// ```
#[derive(Clone, Default)]
pub struct ObjectValidator {
    fields: IndexMap<String, FieldValidator<Value>>,
}

impl ObjectValidator {
    /// Creates a validator with no registered fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or extends) the chain for `name` through `build`.
    ///
    /// Calling `field` twice with the same name appends to the existing chain.
    pub fn field<F>(mut self, name: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(FieldValidator<Value>) -> FieldValidator<Value>,
    {
        let slot = self.field_mut(name);
        let current = std::mem::take(slot);
        *slot = build(current);
        self
    }

    /// Returns the chain for `name`, creating and registering an empty one
    /// first if needed.
    pub fn field_mut(&mut self, name: impl Into<String>) -> &mut FieldValidator<Value> {
        self.fields.entry(name.into()).or_default()
    }

    /// Returns the chain registered for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&FieldValidator<Value>> {
        self.fields.get(name)
    }

    /// Registered field names, in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no field is registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates any serializable record.
    ///
    /// A record that cannot be turned into JSON yields an invalid result
    /// with a single `serialization` error.
    pub fn validate<T>(&self, record: &T) -> ObjectValidationResult
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(record) {
            Ok(value) => self.validate_value(&value),
            Err(err) => {
                tracing::warn!(error = %err, "record could not be serialized for validation");
                ObjectValidationResult {
                    valid: false,
                    errors: vec![ValidationError::new(
                        "serialization",
                        format!("Record could not be read: {err}"),
                    )],
                    field_errors: IndexMap::new(),
                }
            }
        }
    }

    /// Validates a JSON record. Non-object values have no fields, so every
    /// registered field is validated against `null`.
    pub fn validate_value(&self, record: &Value) -> ObjectValidationResult {
        let mut errors = Vec::new();
        let mut field_errors = IndexMap::new();

        for (name, validator) in &self.fields {
            let value = record.get(name).unwrap_or(&Value::Null);
            let result = validator.validate(value);
            if !result.valid {
                let named: Vec<ValidationError> = result
                    .errors
                    .into_iter()
                    .map(|e| e.with_field(name.clone()))
                    .collect();
                errors.extend(named.iter().cloned());
                field_errors.insert(name.clone(), named);
            }
        }

        ObjectValidationResult {
            valid: errors.is_empty(),
            errors,
            field_errors,
        }
    }
}

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn signup() -> ObjectValidator {
        ObjectValidator::new()
            .field("username", |f| f.min_length(3))
            .field("email", |f| f.email())
    }

    #[test]
    fn test_reports_every_failing_field() {
        let result = signup().validate_value(&json!({"username": "ab", "email": "bad"}));
        assert!(!result.valid);
        assert_eq!(
            result.field_errors.keys().map(String::as_str).collect::<Vec<_>>(),
            ["username", "email"]
        );
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].field.as_deref(), Some("username"));
    }

    #[test]
    fn test_valid_record_has_no_field_errors() {
        let result =
            signup().validate_value(&json!({"username": "alice", "email": "alice@example.com"}));
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.field_errors.is_empty());
    }

    #[test]
    fn test_unregistered_fields_are_ignored() {
        let result = signup().validate_value(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "nickname": "",
        }));
        assert!(result.valid);
    }

    #[test]
    fn test_missing_field_is_null() {
        let validator = ObjectValidator::new().field("name", |f| f.required());
        let result = validator.validate_value(&json!({}));
        assert_eq!(result.field_messages("name"), ["This field is required"]);
    }

    #[test]
    fn test_field_twice_extends_the_chain() {
        let validator = ObjectValidator::new()
            .field("name", |f| f.required())
            .field("name", |f| f.max_length(2));
        assert_eq!(validator.len(), 1);
        assert_eq!(validator.get("name").map(FieldValidator::len), Some(2));
    }

    #[test]
    fn test_field_mut_registers_lazily() {
        let mut validator = ObjectValidator::new();
        assert!(validator.is_empty());
        validator.field_mut("path");
        validator.field_mut("path");
        assert_eq!(validator.fields().collect::<Vec<_>>(), ["path"]);
    }

    #[test]
    fn test_validate_serializable_record() {
        #[derive(Serialize)]
        struct Account {
            username: String,
            age: u32,
        }

        let validator = ObjectValidator::new()
            .field("username", |f| f.required().username())
            .field("age", |f| f.range(18, 100));

        let ok = Account {
            username: "bob".into(),
            age: 30,
        };
        assert!(validator.validate(&ok).valid);

        let bad = Account {
            username: "b o b".into(),
            age: 12,
        };
        let result = validator.validate(&bad);
        assert_eq!(result.field_errors.len(), 2);
    }

    #[test]
    fn test_unserializable_record_is_invalid() {
        let mut map = BTreeMap::new();
        map.insert(vec![1_u8], "non-string key");
        let result = signup().validate(&map);
        assert!(!result.valid);
        assert_eq!(result.errors[0].code, "serialization");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let record = json!({"username": "ab", "email": "bad"});
        let validator = signup();
        assert_eq!(validator.validate_value(&record), validator.validate_value(&record));
    }
}
