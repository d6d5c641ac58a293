use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ProductError;

/// Raw product record as exchanged with the persistence collaborator.
///
/// Every field is optional: a record is only a bag of whatever the store (or
/// the caller) supplied. Missing keys deserialize to `None` and unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,
}

impl ProductRecord {
    /// Builds a record from an untyped JSON value.
    ///
    /// Fails only when `value` is not an object, or when a present field holds
    /// a value of the wrong JSON type.
    pub fn from_value(value: Value) -> Result<Self, ProductError> {
        if !value.is_object() {
            return Err(ProductError::MalformedRecord);
        }
        serde_json::from_value(value).map_err(|_| ProductError::MalformedRecord)
    }
}
