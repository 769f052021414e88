//! A single predicate + failure pair

use std::fmt;
use std::sync::Arc;

use super::ValidationError;

/// One link of a rule chain: a pure predicate and the error reported when
/// it returns `false`.
///
/// Rules are immutable once built and cheap to clone (the predicate is
/// shared).
pub struct ValidationRule<T: ?Sized> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    error: ValidationError,
}

impl<T: ?Sized> ValidationRule<T> {
    /// Creates a rule from a predicate and the error reported on failure.
    pub fn new<F>(predicate: F, error: ValidationError) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            error,
        }
    }

    /// Keeps the predicate and replaces the failure error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(mut self, error: ValidationError) -> Self {
        self.error = error;
        self
    }

    /// Runs the predicate.
    #[inline]
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Runs the predicate and returns the failure error, if any.
    pub fn evaluate(&self, value: &T) -> Option<ValidationError> {
        if self.check(value) {
            None
        } else {
            Some(self.error.clone())
        }
    }

    /// The error reported when this rule fails.
    pub fn error(&self) -> &ValidationError {
        &self.error
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.error.message
    }
}

// Manual impls: the predicate is a trait object.
impl<T: ?Sized> Clone for ValidationRule<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            error: self.error.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ValidationRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("predicate", &"<function>")
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_reports_error_only_on_failure() {
        let rule =
            ValidationRule::<i32>::new(|n| *n > 0, ValidationError::custom("must be positive"));
        assert!(rule.evaluate(&1).is_none());
        assert_eq!(rule.evaluate(&0).map(|e| e.message), Some("must be positive".into()));
        assert_eq!(rule.message(), "must be positive");
    }

    #[test]
    fn clones_share_the_predicate() {
        let rule = ValidationRule::<str>::new(|s| s.len() == 2, ValidationError::custom("len"));
        let copy = rule.clone();
        assert!(copy.check("ab"));
        assert!(!copy.check("abc"));
    }
}
