//! Reusable field checks.
//!
//! A [`Check`] decides whether a raw input value satisfies one property; a
//! [`Rule`] binds a check to a field path, a source location, and the message
//! reported on failure. The same check is reused with different messages per
//! endpoint and field, so the message lives on the rule, not the check.

use serde_json::Value;

use crate::responses::Location;

/// A single reusable predicate over a raw field value.
///
/// `None` means the field was absent from the request; every check except
/// [`Check::Optional`] fails on an absent field.
#[derive(Debug, Clone)]
pub enum Check {
    /// Parses as a base-10 integer.
    Integer,
    /// Parses as a number and is strictly greater than zero.
    Positive,
    /// Is a text value.
    Text,
    /// Has a non-empty textual form.
    NotEmpty,
    /// Parses as a number; decimals and signs are accepted.
    Numeric,
    /// Is exactly `true` or `false`, not a string resembling a boolean.
    Boolean,
    /// Treats an absent field as passing; a present value runs the inner
    /// check.
    Optional(Box<Check>),
}

impl Check {
    pub fn optional(inner: Check) -> Self {
        Check::Optional(Box::new(inner))
    }

    /// Whether `value` satisfies this check.
    pub fn passes(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (Check::Optional(_), None) => true,
            (_, None) => false,
            (check, Some(value)) => check.check_value(value),
        }
    }

    fn check_value(&self, value: &Value) -> bool {
        match self {
            Check::Integer => as_integer(value).is_some(),
            Check::Positive => as_number(value).is_some_and(|n| n > 0.0),
            Check::Text => value.is_string(),
            Check::NotEmpty => has_text_form(value),
            Check::Numeric => as_number(value).is_some(),
            Check::Boolean => value.is_boolean(),
            Check::Optional(inner) => inner.check_value(value),
        }
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

// Strings must be non-empty; numbers and booleans always have a textual
// form; null, arrays and objects have none.
fn has_text_form(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
        _ => false,
    }
}

/// One declared validation: which field, where it comes from, the check to
/// run, and the message reported when the check fails.
#[derive(Debug, Clone)]
pub struct Rule {
    pub path: &'static str,
    pub location: Location,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    /// Rule over a path parameter.
    pub fn param(path: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            path,
            location: Location::Params,
            check,
            message,
        }
    }

    /// Rule over a body field.
    pub fn body(path: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            path,
            location: Location::Body,
            check,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_check() {
        assert!(Check::Integer.passes(Some(&json!("10"))));
        assert!(Check::Integer.passes(Some(&json!(10))));
        assert!(Check::Integer.passes(Some(&json!("-4"))));
        assert!(!Check::Integer.passes(Some(&json!("3.5"))));
        assert!(!Check::Integer.passes(Some(&json!("invalid-id"))));
        assert!(!Check::Integer.passes(Some(&json!(true))));
        assert!(!Check::Integer.passes(None));
    }

    #[test]
    fn test_positive_check() {
        assert!(Check::Positive.passes(Some(&json!(100))));
        assert!(Check::Positive.passes(Some(&json!("0.5"))));
        assert!(!Check::Positive.passes(Some(&json!(-23))));
        assert!(!Check::Positive.passes(Some(&json!(0))));
        assert!(!Check::Positive.passes(Some(&json!("Hello World"))));
        assert!(!Check::Positive.passes(None));
    }

    #[test]
    fn test_text_check() {
        assert!(Check::Text.passes(Some(&json!("Monitor Curvo"))));
        assert!(Check::Text.passes(Some(&json!(""))));
        assert!(!Check::Text.passes(Some(&json!(42))));
        assert!(!Check::Text.passes(None));
    }

    #[test]
    fn test_not_empty_check() {
        assert!(Check::NotEmpty.passes(Some(&json!("Monitor Curvo"))));
        assert!(Check::NotEmpty.passes(Some(&json!(-23))));
        assert!(!Check::NotEmpty.passes(Some(&json!(""))));
        assert!(!Check::NotEmpty.passes(Some(&json!(null))));
        assert!(!Check::NotEmpty.passes(None));
    }

    #[test]
    fn test_numeric_check() {
        assert!(Check::Numeric.passes(Some(&json!(399))));
        assert!(Check::Numeric.passes(Some(&json!(-23))));
        assert!(Check::Numeric.passes(Some(&json!("19.99"))));
        assert!(!Check::Numeric.passes(Some(&json!("Hello World"))));
        assert!(!Check::Numeric.passes(Some(&json!(false))));
        assert!(!Check::Numeric.passes(None));
    }

    #[test]
    fn test_boolean_check_is_strict() {
        assert!(Check::Boolean.passes(Some(&json!(true))));
        assert!(Check::Boolean.passes(Some(&json!(false))));
        assert!(!Check::Boolean.passes(Some(&json!("true"))));
        assert!(!Check::Boolean.passes(Some(&json!(1))));
        assert!(!Check::Boolean.passes(None));
    }

    #[test]
    fn test_optional_passes_on_absent_field() {
        let check = Check::optional(Check::Boolean);
        assert!(check.passes(None));
        assert!(check.passes(Some(&json!(false))));
        assert!(!check.passes(Some(&json!("false"))));
        assert!(!check.passes(Some(&json!(null))));
    }
}
