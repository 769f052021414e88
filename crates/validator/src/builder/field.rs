//! Rule chain for a single value
//!
//! A [`FieldValidator`] is an ordered list of [`ValidationRule`]s built once
//! (usually next to the form it guards) and evaluated on every input event.
//! Evaluation never short-circuits: every failing rule contributes its error
//! so the UI can show all problems at once.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{
    FieldValue, NumericBound, ValidationError, ValidationResult, ValidationRule,
};
use crate::validators::content::{is_email, is_username};

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Ordered rule chain for values of type `T`.
///
/// Builder methods consume and return the validator, so chains read top to
/// bottom. Rules that only apply to one runtime shape (length, format,
/// numeric range) pass silently on values of another shape.
///
/// # Examples
///
/// ```
/// use lyra_validator::builder::FieldValidator;
///
/// let username = FieldValidator::<str>::new()
///     .required()
///     .min_length(3)
///     .max_length(10)
///     .username();
///
/// assert!(username.validate("test123").valid);
///
/// let result = username.validate("a@");
/// assert_eq!(
///     result.messages().collect::<Vec<_>>(),
///     [
///         "Must be at least 3 characters",
///         "Username may only contain letters, digits, underscores and hyphens",
///     ]
/// );
/// ```
pub struct FieldValidator<T: ?Sized> {
    rules: Vec<ValidationRule<T>>,
}

impl<T: ?Sized> FieldValidator<T> {
    /// Creates an empty chain. An empty chain accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn add_rule(mut self, rule: ValidationRule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a rule in place.
    pub fn push_rule(&mut self, rule: ValidationRule<T>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Overrides the message of the most recently added rule.
    ///
    /// Does nothing on an empty chain.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        if let Some(last) = self.rules.pop() {
            let error = last.error().clone().with_message(message);
            self.rules.push(last.with_error(error));
        }
        self
    }

    /// Runs every rule against `value` and collects every failure.
    pub fn validate(&self, value: &T) -> ValidationResult {
        let errors = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(value))
            .collect();
        ValidationResult::from_errors(errors)
    }

    /// The registered rules, in evaluation order.
    pub fn rules(&self) -> &[ValidationRule<T>] {
        &self.rules
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ============================================================================
// BUILT-IN RULES
// ============================================================================

impl<T> FieldValidator<T>
where
    T: FieldValue + ?Sized + 'static,
{
    /// Fails on missing values: `None`, JSON `null`, or an empty string.
    pub fn required(self) -> Self {
        self.add_rule(ValidationRule::new(
            |value: &T| !value.is_missing(),
            ValidationError::required(),
        ))
    }

    /// Strings must hold at least `min` characters. Other values pass.
    pub fn min_length(self, min: usize) -> Self {
        self.add_rule(ValidationRule::new(
            move |value: &T| value.as_text().is_none_or(|text| text.chars().count() >= min),
            ValidationError::min_length(min),
        ))
    }

    /// Strings must hold at most `max` characters. Other values pass.
    pub fn max_length(self, max: usize) -> Self {
        self.add_rule(ValidationRule::new(
            move |value: &T| value.as_text().is_none_or(|text| text.chars().count() <= max),
            ValidationError::max_length(max),
        ))
    }

    /// Strings must look like `local@domain.tld`. Other values pass.
    pub fn email(self) -> Self {
        self.add_rule(ValidationRule::new(
            |value: &T| value.as_text().is_none_or(is_email),
            ValidationError::invalid_format("email", "Invalid email format"),
        ))
    }

    /// Strings may only hold ASCII letters, digits, `_` and `-`. Other values pass.
    pub fn username(self) -> Self {
        self.add_rule(ValidationRule::new(
            |value: &T| value.as_text().is_none_or(is_username),
            ValidationError::invalid_format(
                "username",
                "Username may only contain letters, digits, underscores and hyphens",
            ),
        ))
    }

    /// Numbers must fall within `[min, max]`. Other values pass.
    pub fn range<N: NumericBound>(self, min: N, max: N) -> Self {
        let (min, max) = (min.to_f64(), max.to_f64());
        self.add_rule(ValidationRule::new(
            move |value: &T| value.as_number().is_none_or(|n| n >= min && n <= max),
            ValidationError::out_of_range(min, max),
        ))
    }

    /// Arbitrary predicate. A panicking predicate propagates to the caller.
    pub fn custom<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.add_rule(ValidationRule::new(predicate, ValidationError::custom(message)))
    }
}

// ============================================================================
// TRAIT IMPLS
// ============================================================================

impl<T: ?Sized> Default for FieldValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for FieldValidator<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for FieldValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.rules.iter().map(|r| r.error().code.as_ref()).collect();
        f.debug_struct("FieldValidator")
            .field("rules", &codes)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_required() {
        let validator = FieldValidator::<Option<String>>::new().required();
        assert!(validator.validate(&Some("test".into())).valid);
        assert!(!validator.validate(&Some(String::new())).valid);
        assert!(!validator.validate(&None).valid);
    }

    #[test]
    fn test_required_whitespace_is_present() {
        assert!(FieldValidator::<str>::new().required().validate(" ").valid);
    }

    #[test]
    fn test_min_length() {
        let validator = FieldValidator::<str>::new().min_length(3);
        assert!(validator.validate("test").valid);
        assert!(validator.validate("abc").valid);
        assert!(!validator.validate("ab").valid);
    }

    #[test]
    fn test_max_length() {
        let validator = FieldValidator::<str>::new().max_length(5);
        assert!(validator.validate("test").valid);
        assert!(!validator.validate("toolong").valid);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let validator = FieldValidator::<str>::new().max_length(3);
        assert!(validator.validate("\u{6587}\u{4ef6}\u{5939}").valid);
    }

    #[test]
    fn test_email_and_username() {
        let email = FieldValidator::<str>::new().email();
        assert!(email.validate("test@example.com").valid);
        assert!(!email.validate("invalid-email").valid);

        let username = FieldValidator::<str>::new().username();
        assert!(username.validate("test_user-123").valid);
        assert!(!username.validate("test@user").valid);
    }

    #[test]
    fn test_range_inclusive() {
        let validator = FieldValidator::<i64>::new().range(1, 10);
        assert!(validator.validate(&1).valid);
        assert!(validator.validate(&10).valid);
        assert!(!validator.validate(&0).valid);
        assert!(!validator.validate(&11).valid);
    }

    #[test]
    fn test_range_with_wide_integer_bounds() {
        let signed = FieldValidator::<i64>::new().range(-5_i64, 5_i64);
        assert!(signed.validate(&-5).valid);
        assert!(!signed.validate(&6).valid);

        let unsigned = FieldValidator::<u64>::new().range(1_u64, 10_u64);
        assert!(!unsigned.validate(&0).valid);
        assert_eq!(
            unsigned.validate(&11).messages().collect::<Vec<_>>(),
            ["Value must be between 1 and 10"]
        );

        let sizes = FieldValidator::<usize>::new().range(0_usize, 3_usize);
        assert!(sizes.validate(&3).valid);
    }

    #[test]
    fn test_custom() {
        let validator =
            FieldValidator::<str>::new().custom(|s| s.contains("test"), "Must contain \"test\"");
        assert!(validator.validate("testing").valid);
        let result = validator.validate("example");
        assert_eq!(result.messages().collect::<Vec<_>>(), ["Must contain \"test\""]);
    }

    #[test]
    fn test_type_mismatch_is_a_no_op() {
        let numeric = FieldValidator::<i32>::new().min_length(3).max_length(1).email();
        assert!(numeric.validate(&7).valid);

        let text = FieldValidator::<str>::new().min_length(3).range(1, 10);
        assert!(text.validate("abcd").valid);
        assert!(!text.validate("ab").valid);
    }

    #[test]
    fn test_json_values_use_runtime_type() {
        let validator = FieldValidator::<Value>::new().min_length(3).range(1, 10);
        assert!(validator.validate(&json!("abc")).valid);
        assert!(!validator.validate(&json!("ab")).valid);
        assert!(validator.validate(&json!(5)).valid);
        assert!(!validator.validate(&json!(50)).valid);
        assert!(validator.validate(&json!(null)).valid);
    }

    #[test]
    fn test_collects_every_failure_in_order() {
        let validator = FieldValidator::<str>::new()
            .required()
            .min_length(3)
            .username();
        let result = validator.validate("");
        assert_eq!(
            result.errors.iter().map(|e| e.code.as_ref()).collect::<Vec<_>>(),
            ["required", "min_length", "invalid_format"]
        );
    }

    #[test]
    fn test_with_message_overrides_last_rule_only() {
        let validator = FieldValidator::<str>::new()
            .required()
            .min_length(3)
            .with_message("Username must be at least 3 characters");
        let result = validator.validate("");
        assert_eq!(
            result.messages().collect::<Vec<_>>(),
            ["This field is required", "Username must be at least 3 characters"]
        );
        assert_eq!(validator.len(), 2);
    }

    #[test]
    fn test_with_message_on_empty_chain() {
        let validator = FieldValidator::<str>::new().with_message("ignored");
        assert!(validator.is_empty());
    }

    #[test]
    fn test_push_rule_in_place() {
        let mut validator = FieldValidator::<str>::new();
        validator.push_rule(ValidationRule::new(
            |s: &str| s.starts_with('/'),
            ValidationError::custom("absolute path required"),
        ));
        assert!(!validator.validate("relative").valid);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let validator = FieldValidator::<str>::new().required().min_length(5).email();
        assert_eq!(validator.validate("abc"), validator.validate("abc"));
    }

    #[test]
    fn test_empty_chain_accepts_everything() {
        assert!(FieldValidator::<str>::new().validate("").valid);
    }
}
