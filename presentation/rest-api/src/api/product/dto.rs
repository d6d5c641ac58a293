use std::str::FromStr;

use bigdecimal::BigDecimal;
use poem_openapi::Object;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::record::ProductRecord;

/// Fields of a new product. None are required.
#[derive(Debug, Clone, Object)]
pub struct AddProductRequest {
    /// Identifier; assigned by the store when omitted
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Cost as a decimal string, e.g. "9.99"
    #[oai(skip_serializing_if_is_none)]
    pub cost: Option<String>,
    /// Units in stock; stored as 0 when omitted
    #[oai(skip_serializing_if_is_none)]
    pub qty: Option<i64>,
}

impl TryFrom<AddProductRequest> for ProductRecord {
    type Error = ProductError;

    fn try_from(request: AddProductRequest) -> Result<Self, Self::Error> {
        let cost = request
            .cost
            .as_deref()
            .map(BigDecimal::from_str)
            .transpose()
            .map_err(|_| ProductError::MalformedRecord)?;

        Ok(ProductRecord {
            id: request.id,
            name: request.name,
            description: request.description,
            cost,
            qty: request.qty,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQtyRequest {
    /// New quantity (must not be negative)
    pub qty: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Cost as a decimal string
    #[oai(skip_serializing_if_is_none)]
    pub cost: Option<String>,
    /// Units in stock
    pub qty: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            cost: product.cost.map(|c| c.to_string()),
            qty: product.qty,
        }
    }
}
