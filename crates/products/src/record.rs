//! Record-keyed construction, for callers holding loosely-typed field maps.

use serde::Deserialize;
use serde_json::Value;

use lavka_core::{CatalogError, CatalogResult};

use crate::price::PriceInput;
use crate::product::Product;

/// Loosely-typed product fields, keyed the way an import feed supplies them.
///
/// `name` and `description` default to empty strings when absent, which the
/// validation chain then rejects. A missing quantity is rejected outright; a
/// missing price falls through to price coercion, so the failure names the
/// value that could not be parsed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: Option<PriceInput>,
    pub quantity: Option<i64>,
}

impl Product {
    /// Build a base-kind product from a field record.
    pub fn from_record(record: ProductRecord) -> CatalogResult<Self> {
        let quantity = record
            .quantity
            .ok_or_else(|| CatalogError::validation("quantity is missing"))?;
        let price = record
            .price
            .unwrap_or_else(|| PriceInput::Text(String::from("<missing>")));
        Product::new(record.name, record.description, price, quantity)
    }

    /// Build a base-kind product from a JSON mapping.
    pub fn from_value(value: &Value) -> CatalogResult<Self> {
        let record: ProductRecord = serde_json::from_value(value.clone())
            .map_err(|e| CatalogError::validation(format!("malformed product record: {e}")))?;
        Self::from_record(record)
    }
}
