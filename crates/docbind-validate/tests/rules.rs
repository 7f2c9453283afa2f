use docbind_model::{FieldValue, Rule, messages};
use docbind_validate::{RuleEngine, RuleError};

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

#[test]
fn required_fails_on_unset_and_empty_text() {
    let mut engine = RuleEngine::new();
    let rule = Rule::Required;
    assert_eq!(
        engine.evaluate(&rule, &FieldValue::Empty).unwrap(),
        Some(messages::REQUIRED.to_string())
    );
    assert_eq!(
        engine.evaluate(&rule, &text("")).unwrap(),
        Some(messages::REQUIRED.to_string())
    );
    assert_eq!(engine.evaluate(&rule, &text("x")).unwrap(), None);
    assert_eq!(engine.evaluate(&rule, &FieldValue::Int(0)).unwrap(), None);
}

#[test]
fn match_rule_uses_given_pattern_and_fails_unset_values() {
    let mut engine = RuleEngine::new();
    let rule = Rule::Match {
        pattern: "^[A-Z]{3}[0-9]+$".to_string(),
    };
    assert_eq!(engine.evaluate(&rule, &text("ABC123")).unwrap(), None);
    assert_eq!(
        engine.evaluate(&rule, &text("abc")).unwrap(),
        Some(messages::INVALID_FORMAT.to_string())
    );
    assert_eq!(
        engine.evaluate(&rule, &FieldValue::Empty).unwrap(),
        Some(messages::INVALID_FORMAT.to_string())
    );
}

#[test]
fn email_and_phone_fall_back_to_builtin_patterns() {
    let mut engine = RuleEngine::new();
    let email = Rule::Email { pattern: None };
    assert_eq!(
        engine.evaluate(&email, &text("user@example.com")).unwrap(),
        None
    );
    assert_eq!(
        engine.evaluate(&email, &text("not-an-email")).unwrap(),
        Some(messages::INVALID_EMAIL_FORMAT.to_string())
    );

    let phone = Rule::Phone { pattern: None };
    assert_eq!(engine.evaluate(&phone, &text("+84123456789")).unwrap(), None);
    assert_eq!(
        engine.evaluate(&phone, &text("12")).unwrap(),
        Some(messages::INVALID_PHONE_FORMAT.to_string())
    );
}

#[test]
fn numeric_rules_check_the_text_representation() {
    let mut engine = RuleEngine::new();
    assert_eq!(engine.evaluate(&Rule::Integer, &text("42")).unwrap(), None);
    assert_eq!(
        engine.evaluate(&Rule::Integer, &text("forty-two")).unwrap(),
        Some(messages::INVALID_NUMERIC_VALUE.to_string())
    );
    assert_eq!(
        engine
            .evaluate(&Rule::Long, &text("9223372036854775807"))
            .unwrap(),
        None
    );
    assert_eq!(engine.evaluate(&Rule::Float, &text("1.5")).unwrap(), None);
    assert_eq!(
        engine.evaluate(&Rule::Float, &FieldValue::Empty).unwrap(),
        Some(messages::INVALID_FLOAT_PRECISION.to_string())
    );
}

#[test]
fn float_precision_counts_fractional_digits() {
    let mut engine = RuleEngine::new();
    let rule = Rule::FloatPrecision { digits: 2 };
    assert_eq!(engine.evaluate(&rule, &text("1.25")).unwrap(), None);
    assert_eq!(engine.evaluate(&rule, &text("3")).unwrap(), None);
    // Trailing zeros do not count as fractional digits.
    assert_eq!(engine.evaluate(&rule, &text("1.250")).unwrap(), None);
    assert_eq!(
        engine.evaluate(&rule, &text("1.256")).unwrap(),
        Some(messages::INVALID_FLOAT_PRECISION.to_string())
    );
    assert_eq!(
        engine.evaluate(&rule, &text("abc")).unwrap(),
        Some(messages::INVALID_FLOAT_PRECISION.to_string())
    );
}

#[test]
fn length_rules_count_characters() {
    let mut engine = RuleEngine::new();
    let min = Rule::MinLength { min: 3 };
    let max = Rule::MaxLength { max: 5 };
    assert_eq!(engine.evaluate(&min, &text("abc")).unwrap(), None);
    assert_eq!(
        engine.evaluate(&min, &text("ab")).unwrap(),
        Some(messages::min_length(3))
    );
    assert_eq!(
        engine.evaluate(&min, &FieldValue::Empty).unwrap(),
        Some(messages::min_length(3))
    );
    assert_eq!(engine.evaluate(&max, &text("abcde")).unwrap(), None);
    assert_eq!(
        engine.evaluate(&max, &text("abcdef")).unwrap(),
        Some(messages::max_length(5))
    );
    // Numbers validate through their text form.
    assert_eq!(engine.evaluate(&min, &FieldValue::Int(100)).unwrap(), None);
}

#[test]
fn unique_values_applies_to_lists_only() {
    let mut engine = RuleEngine::new();
    let rule = Rule::UniqueValues;
    let distinct = FieldValue::List(vec!["a".to_string(), "b".to_string()]);
    let repeated = FieldValue::List(vec!["a".to_string(), "a".to_string()]);
    assert_eq!(engine.evaluate(&rule, &distinct).unwrap(), None);
    assert_eq!(
        engine.evaluate(&rule, &repeated).unwrap(),
        Some(messages::UNIQUE.to_string())
    );
    assert_eq!(engine.evaluate(&rule, &text("a")).unwrap(), None);
}

#[test]
fn all_rules_run_and_failures_accumulate() {
    let mut engine = RuleEngine::new();
    let rules = vec![
        Rule::Required,
        Rule::Integer,
        Rule::MinLength { min: 2 },
    ];
    let failures = engine.check(&rules, &FieldValue::Empty).unwrap();
    assert_eq!(
        failures,
        vec![
            messages::REQUIRED.to_string(),
            messages::INVALID_NUMERIC_VALUE.to_string(),
            messages::min_length(2),
        ]
    );
}

#[test]
fn invalid_pattern_surfaces_as_rule_error() {
    let mut engine = RuleEngine::new();
    let rule = Rule::Match {
        pattern: "([unclosed".to_string(),
    };
    let error = engine.evaluate(&rule, &text("x")).unwrap_err();
    assert!(matches!(error, RuleError::Pattern { .. }));
    assert!(error.to_string().contains("[unclosed"));
}
