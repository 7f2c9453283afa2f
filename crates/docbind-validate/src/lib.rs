//! Rule engine for per-field validation.
//!
//! Rules are declared as data on field schemas; this engine owns their
//! semantics. Evaluation is per-field and independent: every applicable
//! rule runs, so a single cell can accumulate several failures. A failure
//! is a message string; a rule that cannot be evaluated at all (an invalid
//! pattern) is a [`RuleError`], which callers convert into a field error
//! rather than letting it abort the sheet pass.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use thiserror::Error;

use docbind_model::constants::{DEFAULT_EMAIL_PATTERN, DEFAULT_PHONE_PATTERN};
use docbind_model::{FieldValue, Rule, messages};

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Evaluates rule lists, caching compiled patterns for the duration of one
/// import call.
#[derive(Debug, Default)]
pub struct RuleEngine {
    patterns: HashMap<String, Regex>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every rule against the value, collecting all failure messages.
    pub fn check(&mut self, rules: &[Rule], value: &FieldValue) -> Result<Vec<String>, RuleError> {
        let mut failures = Vec::new();
        for rule in rules {
            if let Some(message) = self.evaluate(rule, value)? {
                failures.push(message);
            }
        }
        Ok(failures)
    }

    /// Evaluate a single rule; `None` means the value passed.
    pub fn evaluate(
        &mut self,
        rule: &Rule,
        value: &FieldValue,
    ) -> Result<Option<String>, RuleError> {
        let failure = match rule {
            Rule::Required => value.is_empty().then(|| messages::REQUIRED.to_string()),
            Rule::Match { pattern } => {
                self.match_failure(pattern, value, messages::INVALID_FORMAT)?
            }
            Rule::Email { pattern } => self.match_failure(
                pattern.as_deref().unwrap_or(DEFAULT_EMAIL_PATTERN),
                value,
                messages::INVALID_EMAIL_FORMAT,
            )?,
            Rule::Phone { pattern } => self.match_failure(
                pattern.as_deref().unwrap_or(DEFAULT_PHONE_PATTERN),
                value,
                messages::INVALID_PHONE_FORMAT,
            )?,
            Rule::Integer => numeric_failure::<i32>(value, messages::INVALID_NUMERIC_VALUE),
            Rule::Long => numeric_failure::<i64>(value, messages::INVALID_NUMERIC_VALUE),
            Rule::Float => numeric_failure::<f32>(value, messages::INVALID_FLOAT_PRECISION),
            Rule::FloatPrecision { digits } => precision_failure(value, *digits),
            Rule::MinLength { min } => match value.text_repr() {
                Some(text) if text.chars().count() >= *min => None,
                _ => Some(messages::min_length(*min)),
            },
            Rule::MaxLength { max } => match value.text_repr() {
                Some(text) if text.chars().count() <= *max => None,
                _ => Some(messages::max_length(*max)),
            },
            Rule::UniqueValues => unique_failure(value),
        };
        Ok(failure)
    }

    fn match_failure(
        &mut self,
        pattern: &str,
        value: &FieldValue,
        message: &str,
    ) -> Result<Option<String>, RuleError> {
        let regex = self.compiled(pattern)?;
        let passed = value
            .text_repr()
            .is_some_and(|text| regex.is_match(&text));
        Ok((!passed).then(|| message.to_string()))
    }

    fn compiled(&mut self, pattern: &str) -> Result<&Regex, RuleError> {
        if !self.patterns.contains_key(pattern) {
            let regex = Regex::new(pattern).map_err(|source| RuleError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
            self.patterns.insert(pattern.to_string(), regex);
        }
        Ok(&self.patterns[pattern])
    }
}

fn numeric_failure<N: std::str::FromStr>(value: &FieldValue, message: &str) -> Option<String> {
    let passed = value
        .text_repr()
        .is_some_and(|text| text.parse::<N>().is_ok());
    (!passed).then(|| message.to_string())
}

/// Passes when the value parses as a float whose shortest representation
/// carries at most `digits` fractional digits.
fn precision_failure(value: &FieldValue, digits: u32) -> Option<String> {
    let passed = value
        .text_repr()
        .and_then(|text| text.parse::<f32>().ok())
        .is_some_and(|parsed| fraction_digits(parsed) <= digits);
    (!passed).then(|| messages::INVALID_FLOAT_PRECISION.to_string())
}

fn fraction_digits(value: f32) -> u32 {
    let rendered = value.to_string();
    match rendered.split_once('.') {
        Some((_, fraction)) => fraction.len() as u32,
        None => 0,
    }
}

fn unique_failure(value: &FieldValue) -> Option<String> {
    let FieldValue::List(items) = value else {
        return None;
    };
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return Some(messages::UNIQUE.to_string());
        }
    }
    None
}
