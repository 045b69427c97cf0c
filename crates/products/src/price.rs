//! Price input coercion and rendering.

use serde::Deserialize;

use lavka_core::{CatalogError, CatalogResult};

/// Raw price as supplied by a caller, before coercion.
///
/// Callers may pass a number or its textual representation; construction
/// coerces to `f64` before any range check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Coerce to a numeric price.
    ///
    /// The error carries the raw input so the caller sees exactly what was
    /// rejected.
    pub fn resolve(&self) -> CatalogResult<f64> {
        match self {
            PriceInput::Number(n) => Ok(*n),
            PriceInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CatalogError::price_not_numeric(s.clone())),
        }
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl core::fmt::Display for PriceInput {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PriceInput::Number(n) => write!(f, "{n}"),
            PriceInput::Text(s) => f.write_str(s),
        }
    }
}

/// Render a price the way the stock listing prints it: whole values keep one
/// decimal place ("100.0"), everything else prints in its shortest form
/// ("99.99").
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        format!("{price}")
    }
}
