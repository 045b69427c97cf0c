use lavka_core::{CatalogError, CatalogResult};

use crate::price::{PriceInput, format_price};

/// Variant tag carrying the fields specific to each product kind.
///
/// Variants add descriptive data only; validation and value arithmetic are
/// identical across kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    Base,
    Smartphone {
        performance_class: String,
        model: String,
        memory_gb: u32,
        color: String,
    },
    LawnGrass {
        country: String,
        germination_period: String,
        color: String,
    },
}

impl ProductKind {
    /// Stable label used in diagnostics and mismatch errors.
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Base => "Product",
            ProductKind::Smartphone { .. } => "Smartphone",
            ProductKind::LawnGrass { .. } => "LawnGrass",
        }
    }
}

/// A sellable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    description: String,
    price: f64,
    /// Stock on hand. Open to direct mutation; only construction enforces a
    /// positive starting quantity.
    pub quantity: u32,
    kind: ProductKind,
}

impl Product {
    /// Validate and construct a base-kind product.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<PriceInput>,
        quantity: i64,
    ) -> CatalogResult<Self> {
        Self::with_kind(
            name.into(),
            description.into(),
            price.into(),
            quantity,
            ProductKind::Base,
        )
    }

    /// Smartphone: base fields plus performance class, model, memory, color.
    #[allow(clippy::too_many_arguments)]
    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<PriceInput>,
        quantity: i64,
        performance_class: impl Into<String>,
        model: impl Into<String>,
        memory_gb: u32,
        color: impl Into<String>,
    ) -> CatalogResult<Self> {
        Self::with_kind(
            name.into(),
            description.into(),
            price.into(),
            quantity,
            ProductKind::Smartphone {
                performance_class: performance_class.into(),
                model: model.into(),
                memory_gb,
                color: color.into(),
            },
        )
    }

    /// Lawn grass: base fields plus origin country, germination period, color.
    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<PriceInput>,
        quantity: i64,
        country: impl Into<String>,
        germination_period: impl Into<String>,
        color: impl Into<String>,
    ) -> CatalogResult<Self> {
        Self::with_kind(
            name.into(),
            description.into(),
            price.into(),
            quantity,
            ProductKind::LawnGrass {
                country: country.into(),
                germination_period: germination_period.into(),
                color: color.into(),
            },
        )
    }

    /// Shared validation chain. The zero-quantity check runs before any other
    /// field check, so it wins when several fields are invalid at once.
    fn with_kind(
        name: String,
        description: String,
        price: PriceInput,
        quantity: i64,
        kind: ProductKind,
    ) -> CatalogResult<Self> {
        if quantity < 0 {
            return Err(CatalogError::validation("quantity cannot be negative"));
        }
        if quantity == 0 {
            return Err(CatalogError::validation("quantity cannot be zero"));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| CatalogError::validation("quantity is out of range"))?;
        if name.trim().is_empty() {
            return Err(CatalogError::validation("name cannot be empty"));
        }
        if description.trim().is_empty() {
            return Err(CatalogError::validation("description cannot be empty"));
        }
        let resolved = price.resolve()?;
        if !(resolved > 0.0) {
            return Err(CatalogError::validation("price must be positive"));
        }

        // Creation diagnostic fires only once validation has passed; the
        // price is reported in its raw, pre-coercion form.
        tracing::debug!(
            kind = kind.label(),
            %name,
            raw_price = %price,
            quantity,
            "product created"
        );

        Ok(Self {
            name,
            description,
            price: resolved,
            quantity,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current price; always positive after construction.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Replace the stored price.
    ///
    /// A non-positive value is not an error: the attempt is logged and the
    /// previous price stays in place.
    pub fn set_price(&mut self, price: f64) {
        if !(price > 0.0) {
            tracing::warn!(
                rejected = price,
                kept = self.price,
                "price must be positive"
            );
            return;
        }
        self.price = price;
    }

    /// Stock value of this entry: price times quantity on hand.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Combined stock value of two entries of the same kind.
    ///
    /// Mixing kinds is rejected: a smartphone total and a lawn-grass total
    /// are not comparable figures even though both are products.
    pub fn combined_value(&self, other: &Product) -> CatalogResult<f64> {
        if core::mem::discriminant(&self.kind) != core::mem::discriminant(&other.kind) {
            return Err(CatalogError::VariantMismatch {
                left: self.kind.label(),
                right: other.kind.label(),
            });
        }
        Ok(self.total_value() + other.total_value())
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {} руб. Остаток: {} шт.",
            self.name,
            format_price(self.price),
            self.quantity
        )
    }
}
