//! Declarative request validation.
//!
//! A [`RuleSet`] is an ordered list of field rules. Evaluation runs every rule,
//! including later rules on a field whose earlier rule already failed, and
//! collects one [`FieldError`] per failing rule in declaration order.

use std::{collections::HashMap, str::FromStr};

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingField,
    TypeMismatch,
    ConstraintViolation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// One failed rule, as rendered in the `errors` array of a 400 response.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub msg: String,
    pub path: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
}

/// Path parameters and body fields of a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    params: Map<String, Value>,
    body: Map<String, Value>,
}

impl RequestInput {
    pub fn new(params: HashMap<String, String>, body: Map<String, Value>) -> Self {
        let params = params
            .into_iter()
            .map(|(name, raw)| (name, Value::String(raw)))
            .collect();
        Self { params, body }
    }

    /// Decodes a raw request body. Empty bodies and JSON values other than
    /// objects carry no fields; anything that is not JSON is rejected.
    pub fn decode_body(bytes: &[u8]) -> Result<Map<String, Value>, serde_json::Error> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(fields) => Ok(fields),
            _ => Ok(Map::new()),
        }
    }

    pub fn get(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Params => self.params.get(field),
            Location::Body => self.body.get(field),
        }
    }

    pub fn body(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }
}

pub type Predicate = fn(Option<&Value>) -> bool;

#[derive(Clone, Copy)]
enum Check {
    Required,
    IsString,
    IsNumeric,
    IsBoolean,
    IsInteger,
    Custom(Predicate),
}

impl Check {
    fn kind(&self) -> ErrorKind {
        match self {
            Check::Required => ErrorKind::MissingField,
            Check::IsString | Check::IsNumeric | Check::IsBoolean | Check::IsInteger => {
                ErrorKind::TypeMismatch
            }
            Check::Custom(_) => ErrorKind::ConstraintViolation,
        }
    }

    fn passes(&self, value: Option<&Value>) -> bool {
        match self {
            Check::Required => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            },
            Check::IsString => matches!(value, Some(Value::String(_))),
            Check::IsNumeric => value.and_then(as_f64).is_some(),
            Check::IsBoolean => value.and_then(as_bool).is_some(),
            Check::IsInteger => value.and_then(as_integer).is_some(),
            Check::Custom(predicate) => predicate(value),
        }
    }
}

#[derive(Clone)]
struct Rule {
    field: &'static str,
    location: Location,
    check: Check,
    message: &'static str,
}

/// Rules declared for one field, in the order they will be evaluated.
pub struct FieldRules {
    field: &'static str,
    location: Location,
    rules: Vec<Rule>,
}

impl FieldRules {
    fn push(mut self, check: Check, message: &'static str) -> Self {
        self.rules.push(Rule {
            field: self.field,
            location: self.location,
            check,
            message,
        });
        self
    }

    pub fn required(self, message: &'static str) -> Self {
        self.push(Check::Required, message)
    }

    pub fn is_string(self, message: &'static str) -> Self {
        self.push(Check::IsString, message)
    }

    pub fn is_numeric(self, message: &'static str) -> Self {
        self.push(Check::IsNumeric, message)
    }

    pub fn is_boolean(self, message: &'static str) -> Self {
        self.push(Check::IsBoolean, message)
    }

    pub fn is_integer(self, message: &'static str) -> Self {
        self.push(Check::IsInteger, message)
    }

    pub fn custom(self, predicate: Predicate, message: &'static str) -> Self {
        self.push(Check::Custom(predicate), message)
    }
}

#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(self, field: &'static str, build: impl FnOnce(FieldRules) -> FieldRules) -> Self {
        self.field(Location::Params, field, build)
    }

    pub fn body(self, field: &'static str, build: impl FnOnce(FieldRules) -> FieldRules) -> Self {
        self.field(Location::Body, field, build)
    }

    fn field(
        mut self,
        location: Location,
        field: &'static str,
        build: impl FnOnce(FieldRules) -> FieldRules,
    ) -> Self {
        let declared = build(FieldRules {
            field,
            location,
            rules: Vec::new(),
        });
        self.rules.extend(declared.rules);
        self
    }

    pub fn evaluate(&self, input: &RequestInput) -> Vec<FieldError> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let value = input.get(rule.location, rule.field);
                if rule.check.passes(value) {
                    return None;
                }
                Some(FieldError {
                    kind: rule.check.kind(),
                    msg: rule.message.to_string(),
                    path: rule.field.to_string(),
                    location: rule.location,
                    value: value.cloned(),
                })
            })
            .collect()
    }
}

/// Numeric values are JSON numbers or strings of the form
/// `[+-]?([0-9]*.)?[0-9]+`.
fn is_numeric_str(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && !frac.is_empty() && all_digits(frac),
        None => !unsigned.is_empty() && all_digits(unsigned),
    }
}

/// Any numeric value, whatever its magnitude.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_numeric_str(s) => s.parse().ok(),
        _ => None,
    }
}

/// Exact decimal form of a numeric value. `None` for non-numeric values and
/// for numbers outside the range `Decimal` can hold.
pub fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(s) if is_numeric_str(s) => {
            let negative = s.starts_with('-');
            let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
            let normalized = match unsigned.strip_prefix('.') {
                Some(frac) => format!("0.{frac}"),
                None => unsigned.to_string(),
            };
            let parsed = Decimal::from_str(&normalized).ok()?;
            Some(if negative { -parsed } else { parsed })
        }
        _ => None,
    }
}

pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => {
            let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(params: &[(&str, &str)], body: Value) -> RequestInput {
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let body = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        RequestInput::new(params, body)
    }

    fn positive(value: Option<&Value>) -> bool {
        value.and_then(as_decimal).is_some_and(|d| d > Decimal::ZERO)
    }

    #[test]
    fn every_rule_on_a_missing_field_reports() {
        let rules = RuleSet::new().body("price", |f| {
            f.required("required")
                .is_numeric("numeric")
                .custom(positive, "positive")
        });
        let errors = rules.evaluate(&input(&[], json!({})));

        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ErrorKind::MissingField,
                ErrorKind::TypeMismatch,
                ErrorKind::ConstraintViolation
            ]
        );
        assert!(errors.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn errors_follow_declaration_order_across_locations() {
        let rules = RuleSet::new()
            .param("id", |f| f.is_integer("Id has to be integer"))
            .body("name", |f| f.required("Name is required"));
        let errors = rules.evaluate(&input(&[("id", "abc")], json!({})));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].msg, "Id has to be integer");
        assert_eq!(errors[0].location, Location::Params);
        assert_eq!(errors[0].value, Some(json!("abc")));
        assert_eq!(errors[1].path, "name");
        assert_eq!(errors[1].location, Location::Body);
    }

    #[test]
    fn required_rejects_null_and_empty_string_only() {
        let rules = RuleSet::new().body("name", |f| f.required("Name is required"));

        assert_eq!(rules.evaluate(&input(&[], json!({ "name": null }))).len(), 1);
        assert_eq!(rules.evaluate(&input(&[], json!({ "name": "" }))).len(), 1);
        assert!(rules.evaluate(&input(&[], json!({ "name": " " }))).is_empty());
        assert!(rules.evaluate(&input(&[], json!({ "name": 0 }))).is_empty());
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(as_decimal(&json!(100)), Some(Decimal::from(100)));
        assert_eq!(as_decimal(&json!("12.50")), Decimal::from_str("12.50").ok());
        assert_eq!(as_decimal(&json!(".5")), Decimal::from_str("0.5").ok());
        assert_eq!(as_decimal(&json!("-3")), Some(Decimal::from(-3)));
        assert_eq!(as_decimal(&json!("+7")), Some(Decimal::from(7)));
        assert_eq!(as_decimal(&json!("price-test")), None);
        assert_eq!(as_decimal(&json!("1.")), None);
        assert_eq!(as_decimal(&json!("1e3")), None);
        assert_eq!(as_decimal(&json!("")), None);
        assert_eq!(as_decimal(&json!(true)), None);
        assert_eq!(as_decimal(&json!(1e30)), None);
    }

    #[test]
    fn numeric_check_accepts_any_magnitude() {
        let rules = RuleSet::new().body("price", |f| f.is_numeric("numeric"));

        assert!(rules.evaluate(&input(&[], json!({ "price": 1e30 }))).is_empty());
        assert!(rules.evaluate(&input(&[], json!({ "price": "-0.5" }))).is_empty());
        assert_eq!(rules.evaluate(&input(&[], json!({ "price": "1e3" }))).len(), 1);
        assert_eq!(as_f64(&json!("+7")), Some(7.0));
        assert_eq!(as_f64(&json!(".5")), Some(0.5));
    }

    #[test]
    fn boolean_coercion() {
        assert_eq!(as_bool(&json!(true)), Some(true));
        assert_eq!(as_bool(&json!("false")), Some(false));
        assert_eq!(as_bool(&json!(1)), Some(true));
        assert_eq!(as_bool(&json!("yes")), None);
        assert_eq!(as_bool(&json!(2)), None);
    }

    #[test]
    fn integer_coercion() {
        assert_eq!(as_integer(&json!("42")), Some(42));
        assert_eq!(as_integer(&json!("-1")), Some(-1));
        assert_eq!(as_integer(&json!("1.5")), None);
        assert_eq!(as_integer(&json!(" 1")), None);
        assert_eq!(as_integer(&json!("abc")), None);
        assert_eq!(as_integer(&json!("99999999999999999999")), None);
    }

    #[test]
    fn decode_body_tolerates_empty_and_non_object_bodies() {
        assert!(RequestInput::decode_body(b"").unwrap().is_empty());
        assert!(RequestInput::decode_body(b"  \n").unwrap().is_empty());
        assert!(RequestInput::decode_body(b"[1, 2]").unwrap().is_empty());
        assert_eq!(
            RequestInput::decode_body(br#"{"name":"x"}"#).unwrap().get("name"),
            Some(&json!("x"))
        );
        assert!(RequestInput::decode_body(b"{not json").is_err());
    }
}
