//! Runtime shape of validated values
//!
//! Rules that only make sense for one kind of value (length for strings,
//! ranges for numbers) ask the value for that view through [`FieldValue`].
//! A value that has no such view is passed through untouched, so a chain
//! like `.min_length(3).range(1.0, 10.0)` is safe on any field.

use serde_json::Value;

/// Trait for values a [`FieldValidator`](crate::builder::FieldValidator) can inspect.
pub trait FieldValue {
    /// Returns `true` for absent values: `None`, JSON `null`, or an empty string.
    fn is_missing(&self) -> bool;

    /// Returns the string view of this value, if it is a string.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Returns the numeric view of this value, if it is a number.
    fn as_number(&self) -> Option<f64> {
        None
    }
}

// ============================================================================
// STRINGS
// ============================================================================

impl FieldValue for str {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldValue for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

// ============================================================================
// NUMBERS AND BOOLEANS
// ============================================================================

/// Numeric types usable as bounds of
/// [`FieldValidator::range`](crate::builder::FieldValidator::range).
///
/// Bounds are compared as `f64`; 64-bit integers beyond 2^53 lose precision.
pub trait NumericBound: Copy {
    /// Returns the bound as `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! numeric_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                #[inline]
                fn is_missing(&self) -> bool {
                    false
                }

                #[inline]
                fn as_number(&self) -> Option<f64> {
                    Some(self.to_f64())
                }
            }

            impl NumericBound for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

numeric_field_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

impl FieldValue for f64 {
    #[inline]
    fn is_missing(&self) -> bool {
        false
    }

    #[inline]
    fn as_number(&self) -> Option<f64> {
        Some(*self)
    }
}

impl NumericBound for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl FieldValue for bool {
    fn is_missing(&self) -> bool {
        false
    }
}

// ============================================================================
// WRAPPERS
// ============================================================================

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }

    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn is_missing(&self) -> bool {
        self.as_ref().is_none_or(FieldValue::is_missing)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(FieldValue::as_text)
    }

    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(FieldValue::as_number)
    }
}

// ============================================================================
// JSON
// ============================================================================

impl FieldValue for Value {
    fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn as_number(&self) -> Option<f64> {
        self.as_f64()
    }
}
