// src/tests/utils.rs

use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::domain::guarantee::{Category, GuaranteeRecord, Money, RecordFields};
use crate::domain::logic::derive_status;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

/// Returns a fresh test database using the production schema
pub fn make_db(name: &str) -> Database {
    let path = std::env::temp_dir().join(format!("{name}_{}.sqlite", unique_suffix()));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// A config whose output lands in its own temp directory.
pub fn test_config(name: &str) -> Config {
    Config {
        out_dir: temp_dir(name),
        ..Config::default()
    }
}

pub fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{name}_{}", unique_suffix()))
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// 2025-01-01 12:00, the fixed "now" used across tests.
pub fn now() -> NaiveDateTime {
    date("2025-01-01").and_hms_opt(12, 0, 0).unwrap()
}

pub fn record(id: i64, name: &str, brand: &str, category: Category, expiry: &str, amount: u64) -> GuaranteeRecord {
    let expiry_date = date(expiry);
    GuaranteeRecord::new(
        RecordFields {
            id,
            product_name: name.to_string(),
            brand: brand.to_string(),
            category,
            purchase_date: date("2020-06-15"),
            expiry_date,
            warranty_period: "1 year".to_string(),
            purchase_amount: Money::inr(amount),
            documents: vec!["warranty_card.pdf".to_string()],
        },
        derive_status(expiry_date, now(), 45),
    )
    .unwrap()
}

/// Five records over three categories. At `now()`:
/// Sony expired, LG expires in 78 days, Dell in 374, Godrej in 879,
/// Philips in 45 (the last day of the 45-day window).
pub fn mixed_records() -> Vec<GuaranteeRecord> {
    vec![
        record(1, "Sony Headphones", "Sony", Category::Electronics, "2024-12-15", 8000),
        record(2, "LG Refrigerator", "LG", Category::Appliances, "2025-03-20", 35000),
        record(3, "Dell Inspiron Laptop", "Dell", Category::Electronics, "2026-01-10", 55000),
        record(4, "Godrej Steel Almirah", "Godrej", Category::Furniture, "2027-05-30", 12000),
        record(5, "Philips Trimmer", "Philips", Category::Electronics, "2025-02-15", 2500),
    ]
}

pub fn names(records: &[&GuaranteeRecord]) -> Vec<String> {
    records.iter().map(|r| r.product_name.clone()).collect()
}
