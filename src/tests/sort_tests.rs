// src/tests/sort_tests.rs

use crate::domain::guarantee::{Category, GuaranteeRecord, Status};
use crate::domain::sort::{sort_records, SortCriteria, SortDirection, SortKey};
use crate::errors::LockerError;
use crate::tests::utils::{mixed_records, names, record};
use std::cmp::Ordering;

fn by(key: SortKey, direction: SortDirection) -> SortCriteria {
    SortCriteria::new(key, direction)
}

#[test]
fn expiry_scenario_ascending_and_descending() {
    let records = vec![
        record(1, "Sony Headphones", "Sony", Category::Electronics, "2024-12-15", 8000),
        record(2, "LG Fridge", "LG", Category::Appliances, "2025-03-20", 35000),
        record(3, "Dell Laptop", "Dell", Category::Electronics, "2026-01-10", 55000),
    ];
    let refs: Vec<&GuaranteeRecord> = records.iter().collect();

    let asc = sort_records(&refs, &by(SortKey::Expiry, SortDirection::Asc));
    assert_eq!(names(&asc), vec!["Sony Headphones", "LG Fridge", "Dell Laptop"]);

    let desc = sort_records(&refs, &by(SortKey::Expiry, SortDirection::Desc));
    assert_eq!(names(&desc), vec!["Dell Laptop", "LG Fridge", "Sony Headphones"]);
}

#[test]
fn default_sort_is_expiry_ascending() {
    assert_eq!(
        SortCriteria::default(),
        by(SortKey::Expiry, SortDirection::Asc)
    );
}

#[test]
fn ties_keep_input_order_in_both_directions() {
    let records = vec![
        record(1, "Alpha", "A", Category::Electronics, "2026-01-01", 1000),
        record(2, "Bravo", "B", Category::Electronics, "2025-06-01", 5000),
        record(3, "Charlie", "C", Category::Electronics, "2026-01-01", 1000),
        record(4, "Delta", "D", Category::Electronics, "2025-06-01", 5000),
    ];
    let refs: Vec<&GuaranteeRecord> = records.iter().collect();

    let asc = sort_records(&refs, &by(SortKey::Value, SortDirection::Asc));
    assert_eq!(names(&asc), vec!["Alpha", "Charlie", "Bravo", "Delta"]);

    let desc = sort_records(&refs, &by(SortKey::Value, SortDirection::Desc));
    assert_eq!(names(&desc), vec!["Bravo", "Delta", "Alpha", "Charlie"]);

    let desc = sort_records(&refs, &by(SortKey::Expiry, SortDirection::Desc));
    assert_eq!(names(&desc), vec!["Alpha", "Charlie", "Bravo", "Delta"]);
}

#[test]
fn descending_reverses_ascending_without_ties() {
    let records = mixed_records();
    let refs: Vec<&GuaranteeRecord> = records.iter().collect();

    for key in [SortKey::Name, SortKey::Expiry, SortKey::Value] {
        let asc = sort_records(&refs, &by(key, SortDirection::Asc));
        let mut desc = sort_records(&refs, &by(key, SortDirection::Desc));
        desc.reverse();
        assert_eq!(names(&asc), names(&desc), "key {key:?}");
    }
}

#[test]
fn comparator_is_total_on_distinct_keys() {
    let records = mixed_records();
    for key in [SortKey::Name, SortKey::Expiry, SortKey::Value] {
        let c = by(key, SortDirection::Asc);
        for a in &records {
            for b in &records {
                if a.id == b.id {
                    assert_eq!(c.compare(a, b), Ordering::Equal);
                } else {
                    let ab = c.compare(a, b);
                    assert_ne!(ab, Ordering::Equal, "{key:?} {} vs {}", a.id, b.id);
                    assert_eq!(ab, c.compare(b, a).reverse());
                }
            }
        }
    }
}

#[test]
fn name_sort_ignores_case() {
    let records = vec![
        record(1, "banana", "X", Category::Others, "2026-01-01", 1),
        record(2, "Apple", "X", Category::Others, "2026-01-01", 1),
        record(3, "cherry", "X", Category::Others, "2026-01-01", 1),
    ];
    let refs: Vec<&GuaranteeRecord> = records.iter().collect();
    let out = sort_records(&refs, &by(SortKey::Name, SortDirection::Asc));
    assert_eq!(names(&out), vec!["Apple", "banana", "cherry"]);
}

#[test]
fn status_sorts_by_label_text() {
    let records = mixed_records();
    let refs: Vec<&GuaranteeRecord> = records.iter().collect();
    let out = sort_records(&refs, &by(SortKey::Status, SortDirection::Asc));
    let statuses: Vec<Status> = out.iter().map(|r| r.status).collect();

    // "Active" < "Expired" < "Expiring Soon"
    assert_eq!(
        statuses,
        vec![
            Status::Active,
            Status::Active,
            Status::Active,
            Status::Expired,
            Status::ExpiringSoon
        ]
    );
    // Actives keep their input order.
    assert_eq!(
        names(&out[..3]),
        vec!["LG Refrigerator", "Dell Inspiron Laptop", "Godrej Steel Almirah"]
    );
}

#[test]
fn value_sort_orders_by_amount() {
    let records = mixed_records();
    let refs: Vec<&GuaranteeRecord> = records.iter().collect();
    let out = sort_records(&refs, &by(SortKey::Value, SortDirection::Desc));
    let amounts: Vec<u64> = out.iter().map(|r| r.purchase_amount.amount).collect();
    assert_eq!(amounts, vec![55000, 35000, 12000, 8000, 2500]);
}

#[test]
fn sorting_leaves_input_untouched() {
    let records = mixed_records();
    let refs: Vec<&GuaranteeRecord> = records.iter().collect();
    let before = names(&refs);
    let _ = sort_records(&refs, &by(SortKey::Name, SortDirection::Desc));
    assert_eq!(names(&refs), before);
}

#[test]
fn header_click_toggles_same_key_and_resets_new_key() {
    let start = SortCriteria::default();

    let again = start.select(SortKey::Expiry);
    assert_eq!(again, by(SortKey::Expiry, SortDirection::Desc));

    let back = again.select(SortKey::Expiry);
    assert_eq!(back, by(SortKey::Expiry, SortDirection::Asc));

    let other = again.select(SortKey::Value);
    assert_eq!(other, by(SortKey::Value, SortDirection::Asc));
}

#[test]
fn sort_key_parsing() {
    assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
    assert_eq!("value".parse::<SortKey>().unwrap(), SortKey::Value);
    assert!(matches!(
        "price".parse::<SortKey>(),
        Err(LockerError::InvalidArgument(_))
    ));
    assert!(matches!(
        "up".parse::<SortDirection>(),
        Err(LockerError::InvalidArgument(_))
    ));
}
