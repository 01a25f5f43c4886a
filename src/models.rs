use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, example = "199.99")]
    pub price: Decimal,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies when creating a product; the store assigns the rest.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

/// Fractional digits of the `price` column, `DECIMAL(10, 2)`.
pub const PRICE_SCALE: u32 = 2;

/// Largest value the `price` column holds.
pub fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, PRICE_SCALE)
}

/// Rounds a price the way the `DECIMAL(10, 2)` column stores it: half away
/// from zero, always two fractional digits.
pub fn normalize_price(price: Decimal) -> Decimal {
    let mut price =
        price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    price.rescale(PRICE_SCALE);
    price
}
