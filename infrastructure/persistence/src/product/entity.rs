use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::record::ProductRecord;

/// Row of the `products` table.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<BigDecimal>,
    pub qty: i64,
}

impl ProductEntity {
    pub fn into_record(self) -> ProductRecord {
        ProductRecord {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            cost: self.cost,
            qty: Some(self.qty),
        }
    }
}
