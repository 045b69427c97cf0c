//! Named, ordered groups of products.

use lavka_core::{CatalogError, CatalogResult};
use lavka_products::Product;

use crate::stats::CatalogStats;

/// A named group of products with derived statistics.
///
/// The backing sequence is owned exclusively by the category and reachable
/// only through the methods below, so the registry counters cannot be
/// desynchronized by outside mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<Product>,
}

impl Category {
    /// Open a category holding `products`, registering it and its initial
    /// contents with `stats`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<Product>,
        stats: &mut CatalogStats,
    ) -> Self {
        stats.category_opened(products.len() as u64);
        Self {
            name: name.into(),
            description: description.into(),
            products,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Held products, insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a product, keeping insertion order.
    pub fn add(&mut self, product: Product, stats: &mut CatalogStats) {
        self.products.push(product);
        stats.product_added();
    }

    /// Remove the first held product equal to `product`.
    pub fn remove(
        &mut self,
        product: &Product,
        stats: &mut CatalogStats,
    ) -> CatalogResult<Product> {
        let index = self
            .products
            .iter()
            .position(|held| held == product)
            .ok_or_else(CatalogError::not_found)?;
        let removed = self.products.remove(index);
        stats.product_removed();
        Ok(removed)
    }

    /// Arithmetic mean of held prices; an empty category averages to zero.
    pub fn average_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.products.iter().map(Product::price).sum();
        sum / self.products.len() as f64
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {}\nТоваров: {} шт.",
            self.name,
            self.description,
            self.products.len()
        )?;
        for product in &self.products {
            write!(f, "\n{product}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64, quantity: i64) -> Product {
        Product::new(name, "Desc", price, quantity).unwrap()
    }

    #[test]
    fn construction_registers_category_and_initial_products() {
        let mut stats = CatalogStats::new();
        let initial = vec![product("A", 100.0, 1), product("B", 200.0, 2)];

        let category = Category::new("Смартфоны", "Мобильные устройства", initial, &mut stats);

        assert_eq!(stats.categories(), 1);
        assert_eq!(stats.products(), 2);
        assert_eq!(category.len(), 2);
        assert_eq!(category.name(), "Смартфоны");
        assert_eq!(category.description(), "Мобильные устройства");
    }

    #[test]
    fn every_category_counts_once() {
        let mut stats = CatalogStats::new();
        Category::new("Смартфоны", "Мобильные устройства", Vec::new(), &mut stats);
        Category::new("Ноутбуки", "Портативные компьютеры", Vec::new(), &mut stats);
        assert_eq!(stats.categories(), 2);
    }

    #[test]
    fn counters_span_multiple_categories() {
        let mut stats = CatalogStats::new();
        let mut smartphones =
            Category::new("Смартфоны", "Мобильные устройства", Vec::new(), &mut stats);
        assert_eq!(stats.products(), 0);

        smartphones.add(product("Iphone 15", 210000.0, 8), &mut stats);
        smartphones.add(product("Xiaomi Redmi Note 11", 31000.0, 15), &mut stats);
        Category::new(
            "Ноутбуки",
            "Портативные компьютеры",
            vec![product("Iphone 15", 210000.0, 8)],
            &mut stats,
        );

        assert_eq!(stats.products(), 3);
    }

    #[test]
    fn add_then_remove_restores_the_product_counter() {
        let mut stats = CatalogStats::new();
        let mut category =
            Category::new("Смартфоны", "Мобильные устройства", Vec::new(), &mut stats);
        let item = product("A", 100.0, 1);
        let before = stats.products();

        category.add(item.clone(), &mut stats);
        assert_eq!(stats.products(), before + 1);

        let removed = category.remove(&item, &mut stats).unwrap();
        assert_eq!(removed, item);
        assert_eq!(stats.products(), before);
        assert!(category.is_empty());
    }

    #[test]
    fn removing_an_absent_product_is_not_found() {
        let mut stats = CatalogStats::new();
        let mut category =
            Category::new("Смартфоны", "Мобильные устройства", Vec::new(), &mut stats);

        let err = category
            .remove(&product("A", 100.0, 1), &mut stats)
            .unwrap_err();

        assert_eq!(err, CatalogError::NotFound);
        assert_eq!(stats.products(), 0);
    }

    #[test]
    fn remove_matches_by_equality_and_takes_the_first() {
        let mut stats = CatalogStats::new();
        let item = product("A", 100.0, 1);
        let mut category = Category::new(
            "Смартфоны",
            "Мобильные устройства",
            vec![item.clone(), item.clone()],
            &mut stats,
        );

        category.remove(&item, &mut stats).unwrap();

        assert_eq!(category.len(), 1);
        assert_eq!(stats.products(), 1);
    }

    #[test]
    fn average_price_is_the_arithmetic_mean() {
        let mut stats = CatalogStats::new();
        let mut category =
            Category::new("Смартфоны", "Мобильные устройства", Vec::new(), &mut stats);
        category.add(product("A", 100.0, 1), &mut stats);
        category.add(product("B", 200.0, 2), &mut stats);

        assert_eq!(category.average_price(), 150.0);
    }

    #[test]
    fn empty_category_averages_to_zero() {
        let mut stats = CatalogStats::new();
        let category = Category::new("Смартфоны", "Мобильные устройства", Vec::new(), &mut stats);
        assert_eq!(category.average_price(), 0.0);
    }

    #[test]
    fn display_lists_products_in_insertion_order() {
        let mut stats = CatalogStats::new();
        let mut category =
            Category::new("Смартфоны", "Мобильные устройства", Vec::new(), &mut stats);
        category.add(product("A", 100.0, 1), &mut stats);
        category.add(product("B", 200.0, 2), &mut stats);

        let rendered = category.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Смартфоны, Мобильные устройства");
        assert_eq!(lines[1], "Товаров: 2 шт.");
        assert_eq!(lines[2], "A, 100.0 руб. Остаток: 1 шт.");
        assert_eq!(lines[3], "B, 200.0 руб. Остаток: 2 шт.");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: add-then-remove leaves the product counter unchanged.
            #[test]
            fn add_then_remove_is_counter_neutral(
                price in 0.01f64..10_000.0,
                quantity in 1i64..1_000,
                initial in 0usize..5,
            ) {
                let mut stats = CatalogStats::new();
                let seed = (0..initial)
                    .map(|i| product(&format!("seed {i}"), 10.0, 1))
                    .collect();
                let mut category =
                    Category::new("Смартфоны", "Мобильные устройства", seed, &mut stats);

                let item = Product::new("A", "Desc", price, quantity).unwrap();
                let before = stats.products();

                category.add(item.clone(), &mut stats);
                category.remove(&item, &mut stats).unwrap();

                prop_assert_eq!(stats.products(), before);
                prop_assert_eq!(category.len(), initial);
            }
        }
    }
}
