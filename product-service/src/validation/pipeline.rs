//! Ordered evaluation of declared rules against a raw request.
//!
//! Every rule is evaluated regardless of earlier failures, so one field can
//! accumulate several errors and the error list always mirrors declaration
//! order. Absent or mistyped fields become [`FieldError`]s, never faults.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::rules::Rule;
use crate::responses::{FieldError, Location, ValidationErrors};

/// Raw request data handed to the pipeline: path parameters as received from
/// the router and the JSON body as a field map.
///
/// A missing, non-JSON, or non-object body behaves as an empty map.
#[derive(Debug, Default)]
pub struct RawInput {
    params: HashMap<String, String>,
    body: Map<String, Value>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Option<Value>) -> Self {
        if let Some(Value::Object(map)) = body {
            self.body = map;
        }
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn body_field(&self, path: &str) -> Option<&Value> {
        self.body.get(path)
    }

    fn get(&self, location: Location, path: &str) -> Option<Value> {
        match location {
            Location::Params => self.params.get(path).map(|s| Value::String(s.clone())),
            Location::Body => self.body.get(path).cloned(),
        }
    }
}

/// Evaluates every rule in declaration order and collects the failures in
/// that same order.
pub fn run(rules: &[Rule], input: &RawInput) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for rule in rules {
        let value = input.get(rule.location, rule.path);
        if !rule.check.passes(value.as_ref()) {
            errors.push(FieldError::new(rule.path, rule.location, value, rule.message));
        }
    }
    errors
}

/// Halts the request with a 400 response when any rule failed; otherwise the
/// caller proceeds knowing every declared field is well-formed.
pub fn gate(rules: &[Rule], input: &RawInput) -> Result<(), ValidationErrors> {
    let errors = run(rules, input);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::Check;
    use serde_json::json;

    fn price_rules() -> Vec<Rule> {
        vec![
            Rule::body("price", Check::Numeric, "must be numeric"),
            Rule::body("price", Check::NotEmpty, "is required"),
            Rule::body("price", Check::Positive, "must be positive"),
        ]
    }

    #[test]
    fn test_failures_keep_declaration_order() {
        let rules = vec![
            Rule::body("name", Check::Text, "must be text"),
            Rule::body("name", Check::NotEmpty, "is required"),
            Rule::body("price", Check::Numeric, "must be numeric"),
        ];
        let input = RawInput::new().with_body(Some(json!({})));

        let errors = run(&rules, &input);
        let messages: Vec<&str> = errors.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(messages, ["must be text", "is required", "must be numeric"]);
    }

    #[test]
    fn test_one_field_accumulates_several_failures() {
        let input = RawInput::new().with_body(Some(json!({ "price": "Hello World" })));

        let errors = run(&price_rules(), &input);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].msg, "must be numeric");
        assert_eq!(errors[1].msg, "must be positive");
    }

    #[test]
    fn test_rejected_value_is_echoed() {
        let input = RawInput::new().with_body(Some(json!({ "price": -23 })));

        let errors = run(&price_rules(), &input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].value, Some(json!(-23)));
        assert_eq!(errors[0].path, "price");
    }

    #[test]
    fn test_absent_field_reports_no_value() {
        let input = RawInput::new();

        let errors = run(&price_rules(), &input);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn test_params_are_validated_as_strings() {
        let rules = vec![
            Rule::param("id", Check::Integer, "bad id"),
            Rule::param("id", Check::Positive, "bad id"),
        ];
        let input = RawInput::new().with_param("id", "invalid-id");

        let errors = run(&rules, &input);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].value, Some(json!("invalid-id")));

        let input = RawInput::new().with_param("id", "7");
        assert!(run(&rules, &input).is_empty());
    }

    #[test]
    fn test_gate_passes_clean_input_through() {
        let input = RawInput::new().with_body(Some(json!({ "price": 300 })));
        assert!(gate(&price_rules(), &input).is_ok());

        let input = RawInput::new();
        let errors = gate(&price_rules(), &input).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_non_object_body_behaves_as_empty() {
        let input = RawInput::new().with_body(Some(json!([1, 2, 3])));
        assert_eq!(run(&price_rules(), &input).len(), 3);
    }
}
