use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    middleware::validated::ValidatedInput,
    models::{NewProduct, Product, max_price, normalize_price},
    validation::{
        FieldRules, Location, RequestInput, RuleSet, as_bool, as_decimal, as_f64, as_integer,
    },
};

pub const ID_MESSAGE: &str = "Id has to be integer";

/// Body of `POST /api/products`, documented for the OpenAPI schema.
#[derive(Debug, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    #[schema(value_type = f64, example = 199.99)]
    pub price: Decimal,
}

/// Body of `PUT /api/products/{id}`, documented for the OpenAPI schema.
#[derive(Debug, ToSchema)]
pub struct UpdateProductRequest {
    pub name: String,
    #[schema(value_type = f64, example = 199.99)]
    pub price: Decimal,
    pub availability: bool,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

pub const PRICE_RANGE_MESSAGE: &str = "Price has to be at most 99999999.99";

/// Price as it will be stored, or `None` when it is not numeric or too large
/// for `Decimal`.
fn as_price(value: &Value) -> Option<Decimal> {
    as_decimal(value).map(normalize_price)
}

// Compared after rounding, so `0.001` is not accepted as a positive price.
fn price_is_positive(value: Option<&Value>) -> bool {
    match value.and_then(as_price) {
        Some(price) => price > Decimal::ZERO,
        None => value.and_then(as_f64).is_some_and(|n| n > 0.0),
    }
}

// Values that are not numeric at all are left to the numeric rule.
fn price_fits_column(value: Option<&Value>) -> bool {
    match value.and_then(as_price) {
        Some(price) => price <= max_price(),
        None => value
            .and_then(as_f64)
            .is_none_or(|n| n <= 99_999_999.99),
    }
}

fn id_rules(f: FieldRules) -> FieldRules {
    f.is_integer(ID_MESSAGE)
}

fn name_rules(f: FieldRules) -> FieldRules {
    f.required("Name is required").is_string("Name has to be text")
}

fn price_rules(f: FieldRules) -> FieldRules {
    f.required("Price is required")
        .is_numeric("Price has to be a number")
        .custom(price_is_positive, "Price has to be greater than 0")
        .custom(price_fits_column, PRICE_RANGE_MESSAGE)
}

fn parse_id(input: &RequestInput) -> Option<i64> {
    input.get(Location::Params, "id").and_then(as_integer)
}

fn parse_name(input: &RequestInput) -> Option<String> {
    input.body("name")?.as_str().map(str::to_string)
}

fn parse_price(input: &RequestInput) -> Option<Decimal> {
    input.body("price").and_then(as_price)
}

/// `{id}` path segment shared by the get, patch and delete routes.
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub i64);

impl ValidatedInput for ProductId {
    fn rules() -> RuleSet {
        RuleSet::new().param("id", id_rules)
    }

    fn from_input(input: &RequestInput) -> Option<Self> {
        parse_id(input).map(ProductId)
    }
}

#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
}

impl ValidatedInput for CreateProduct {
    fn rules() -> RuleSet {
        RuleSet::new()
            .body("name", name_rules)
            .body("price", price_rules)
    }

    fn from_input(input: &RequestInput) -> Option<Self> {
        Some(Self {
            name: parse_name(input)?,
            price: parse_price(input)?,
        })
    }
}

impl From<CreateProduct> for NewProduct {
    fn from(input: CreateProduct) -> Self {
        NewProduct {
            name: input.name,
            price: input.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub availability: bool,
}

impl ValidatedInput for UpdateProduct {
    fn rules() -> RuleSet {
        RuleSet::new()
            .param("id", id_rules)
            .body("name", name_rules)
            .body("price", price_rules)
            .body("availability", |f| {
                f.is_boolean("Availability has to be a boolean")
            })
    }

    fn from_input(input: &RequestInput) -> Option<Self> {
        Some(Self {
            id: parse_id(input)?,
            name: parse_name(input)?,
            price: parse_price(input)?,
            availability: input.body("availability").and_then(as_bool)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::{Map, json};

    use super::*;

    fn request(id: Option<&str>, body: Value) -> RequestInput {
        let params: HashMap<String, String> = id
            .map(|id| ("id".to_string(), id.to_string()))
            .into_iter()
            .collect();
        let body = match body {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        RequestInput::new(params, body)
    }

    #[test]
    fn create_rule_counts() {
        let rules = CreateProduct::rules();
        assert_eq!(rules.evaluate(&request(None, json!({}))).len(), 5);

        let zero = rules.evaluate(&request(None, json!({ "name": "p", "price": 0 })));
        assert_eq!(zero.len(), 1);
        assert_eq!(zero[0].msg, "Price has to be greater than 0");

        let text = rules.evaluate(&request(None, json!({ "name": "p", "price": "price-test" })));
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn update_rule_counts() {
        let rules = UpdateProduct::rules();
        assert_eq!(rules.evaluate(&request(Some("1"), json!({}))).len(), 6);
        assert_eq!(rules.evaluate(&request(Some("x"), json!({}))).len(), 7);
    }

    #[test]
    fn typed_inputs_coerce_string_forms() {
        let input = request(
            Some("7"),
            json!({ "name": "Monitor", "price": "300.50", "availability": "false" }),
        );
        assert!(UpdateProduct::rules().evaluate(&input).is_empty());

        let update = UpdateProduct::from_input(&input).unwrap();
        assert_eq!(update.id, 7);
        assert_eq!(update.price.to_string(), "300.50");

        let rounded = request(None, json!({ "name": "Cable", "price": "12.345" }));
        assert_eq!(CreateProduct::from_input(&rounded).unwrap().price.to_string(), "12.35");
        assert!(!update.availability);
    }

    #[test]
    fn prices_beyond_the_column_get_one_range_error() {
        let rules = CreateProduct::rules();
        for price in [json!(100_000_000_000_i64), json!(1e30), json!("123456789")] {
            let errors = rules.evaluate(&request(None, json!({ "name": "p", "price": price })));
            assert_eq!(errors.len(), 1, "price {price}");
            assert_eq!(errors[0].msg, PRICE_RANGE_MESSAGE);
        }

        let edge = rules.evaluate(&request(None, json!({ "name": "p", "price": "99999999.99" })));
        assert!(edge.is_empty());
    }

    #[test]
    fn price_rounding_to_zero_is_not_positive() {
        let errors = CreateProduct::rules()
            .evaluate(&request(None, json!({ "name": "p", "price": 0.001 })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "Price has to be greater than 0");
    }

    #[test]
    fn negative_price_is_a_constraint_violation() {
        let errors = CreateProduct::rules()
            .evaluate(&request(None, json!({ "name": "p", "price": -5 })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "price");
    }
}
