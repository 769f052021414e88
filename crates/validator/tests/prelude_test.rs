//! Integration tests for the prelude module.
//!
//! Verifies that `use lyra_validator::prelude::*` brings in everything
//! a form needs.

use lyra_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn chained_field_validation() {
    let validator = FieldValidator::<str>::new()
        .required()
        .min_length(3)
        .max_length(10)
        .username();

    assert!(validator.validate("test123").valid);
    assert!(!validator.validate("").valid);
    assert!(!validator.validate("ab").valid);
    assert!(!validator.validate("toolongusername").valid);
    assert!(!validator.validate("test@123").valid);
}

#[test]
fn object_validation_spec_example() {
    let validator = ObjectValidator::new()
        .field("username", |f| f.min_length(3))
        .field("email", |f| f.email());

    let result = validator.validate_value(&json!({"username": "ab", "email": "bad"}));
    assert!(!result.valid);
    assert_eq!(
        result.field_errors.keys().map(String::as_str).collect::<Vec<_>>(),
        ["username", "email"]
    );
}

#[test]
fn object_result_json_shape() {
    let validator = ObjectValidator::new().field("age", |f| f.required().range(18, 100));
    let result = validator.validate_value(&json!({"age": 15}));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["message"], "Value must be between 18 and 100");
    assert_eq!(json["fieldErrors"]["age"][0]["field"], "age");
}

#[test]
fn standalone_validators() {
    assert!(validate_file_path("/valid/path/file.txt").valid);
    assert!(!validate_file_path("/path/with<invalid>chars").valid);
    assert!(!validate_file_path("/path/CON/file.txt").valid);

    assert!(validate_file_size(10, Some(100)).valid);
    assert_eq!(format_file_size(10 * 1024 * 1024), "10.0MB");

    let strong = validate_password_strength("StrongP@ssw0rd");
    assert!(strong.valid);
    assert_eq!(strong.strength, PasswordStrength::Strong);

    let weak = validate_password_strength("weak");
    assert!(!weak.valid);
    assert_eq!(weak.strength, PasswordStrength::Weak);
    assert!(weak.errors.iter().any(|e| e.message.contains("8 characters")));
}

#[test]
fn custom_rules_see_the_typed_value() {
    let even = FieldValidator::<u64>::new().custom(|n| n % 2 == 0, "Must be even");
    assert!(even.validate(&4).valid);
    assert_eq!(even.validate(&3).messages().collect::<Vec<_>>(), ["Must be even"]);
}

#[test]
fn validators_are_shareable_across_threads() {
    let validator = std::sync::Arc::new(FieldValidator::<str>::new().required().email());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || validator.validate("user@example.com").valid)
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
#[should_panic(expected = "predicate bug")]
fn panicking_custom_rule_propagates() {
    let validator = FieldValidator::<str>::new().custom(|_| panic!("predicate bug"), "unreachable");
    let _ = validator.validate("x");
}
