use anyhow::Result;

use lavka_catalog::{CatalogStats, Category};
use lavka_products::{Product, format_price};

fn main() -> Result<()> {
    lavka_observability::init();

    let product1 = Product::new(
        "Samsung Galaxy S23 Ultra",
        "256GB, Серый цвет, 200MP камера",
        180000.0,
        5,
    )?;
    let product2 = Product::new("Iphone 15", "512GB, Gray space", 210000.0, 8)?;
    let product3 = Product::new("Xiaomi Redmi Note 11", "1024GB, Синий", 31000.0, 15)?;

    let mut stats = CatalogStats::new();

    let mut smartphones = Category::new(
        "Смартфоны",
        "Мобильные устройства",
        Vec::new(),
        &mut stats,
    );
    smartphones.add(product1.clone(), &mut stats);
    smartphones.add(product2.clone(), &mut stats);

    let mut notebooks = Category::new(
        "Ноутбуки",
        "Портативные компьютеры",
        Vec::new(),
        &mut stats,
    );
    notebooks.add(product3.clone(), &mut stats);

    for (i, product) in [&product1, &product2, &product3].into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", product.name());
        println!("{}", product.description());
        println!("{}", format_price(product.price()));
        println!("{}", product.quantity);
    }

    for category in [&smartphones, &notebooks] {
        println!("\n{category}");
        println!(
            "Средняя цена: {} руб.",
            format_price(category.average_price())
        );
    }

    println!("\nКатегорий: {}", stats.categories());
    println!("Товаров в категориях: {}", stats.products());

    Ok(())
}
