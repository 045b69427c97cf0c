//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (validation,
/// membership, value arithmetic). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A field failed validation at construction time.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A price could not be coerced to a number; payload is the raw input.
    #[error("cannot parse price from '{0}'")]
    PriceNotNumeric(String),

    /// Value arithmetic was attempted over two different product kinds.
    #[error("cannot combine {left} with {right}")]
    VariantMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// The product is not held by the category.
    #[error("product not found in category")]
    NotFound,
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn price_not_numeric(raw: impl Into<String>) -> Self {
        Self::PriceNotNumeric(raw.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
