// src/domain/seed.rs

use crate::domain::guarantee::{parse_date, Category, Money, RecordFields};
use crate::errors::Result;

// (id, product, brand, category, purchased, expires, period, amount ₹, documents)
type SeedRow = (
    i64,
    &'static str,
    &'static str,
    Category,
    &'static str,
    &'static str,
    &'static str,
    u64,
    &'static [&'static str],
);

const SAMPLE_GUARANTEES: [SeedRow; 6] = [
    (
        1,
        "Samsung Galaxy S24",
        "Samsung",
        Category::Electronics,
        "2024-08-15",
        "2025-08-15",
        "1 year",
        75000,
        &["warranty_card.pdf", "purchase_receipt.jpg"],
    ),
    (
        2,
        "LG Refrigerator 260L",
        "LG",
        Category::Appliances,
        "2024-03-20",
        "2025-03-20",
        "1 year",
        35000,
        &["warranty_card.pdf"],
    ),
    (
        3,
        "Dell Inspiron Laptop",
        "Dell",
        Category::Electronics,
        "2025-01-10",
        "2026-01-10",
        "1 year",
        55000,
        &["warranty_card.pdf", "purchase_receipt.pdf"],
    ),
    (
        4,
        "Godrej Steel Almirah",
        "Godrej",
        Category::Furniture,
        "2022-05-30",
        "2027-05-30",
        "5 years",
        12000,
        &["warranty_card.jpg"],
    ),
    (
        5,
        "Sony Headphones",
        "Sony",
        Category::Electronics,
        "2023-12-15",
        "2024-12-15",
        "1 year",
        8000,
        &["warranty_card.pdf", "purchase_receipt.jpg"],
    ),
    (
        6,
        "Whirlpool 1.5 Ton AC",
        "Whirlpool",
        Category::Appliances,
        "2024-12-15",
        "2029-12-15",
        "5 years",
        42000,
        &["warranty_card.pdf"],
    ),
];

/// Demo guarantees loaded into an empty locker.
pub fn sample_guarantees() -> Result<Vec<RecordFields>> {
    SAMPLE_GUARANTEES
        .iter()
        .map(|(id, name, brand, category, purchased, expires, period, amount, docs)| {
            Ok(RecordFields {
                id: *id,
                product_name: name.to_string(),
                brand: brand.to_string(),
                category: *category,
                purchase_date: parse_date(purchased)?,
                expiry_date: parse_date(expires)?,
                warranty_period: period.to_string(),
                purchase_amount: Money::inr(*amount),
                documents: docs.iter().map(|d| d.to_string()).collect(),
            })
        })
        .collect()
}
