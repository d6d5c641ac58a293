use bigdecimal::BigDecimal;
use serde::Serialize;

use super::record::ProductRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<BigDecimal>,
    pub qty: i64,
}

impl Product {
    /// Builds a product from a raw record (no validation).
    ///
    /// Fields are copied as-is; only `qty` is defaulted, to `0`.
    pub fn load(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            cost: record.cost,
            qty: record.qty.unwrap_or(0),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self::load(record)
    }
}
