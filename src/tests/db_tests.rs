// src/tests/db_tests.rs

use crate::db::connection::Database;
use crate::db::guarantees::{count_guarantees, load_guarantees, seed_if_empty};
use crate::db::preferences::{
    clear_prefs, get_pref, push_recent_search, record_search, remember_id, remove_pref, set_pref,
    toggle_theme, Theme, MAX_RECENT_SEARCHES, RECENT_SEARCHES_KEY, THEME_KEY, VIEW_STATE_KEY,
};
use crate::domain::guarantee::{Category, Money, Status};
use crate::domain::sort::{SortCriteria, SortDirection, SortKey};
use crate::domain::upload::{DocumentSubmitter, FileDescriptor, GuaranteeForm, NewGuarantee, WarrantyPeriod};
use crate::domain::view::ViewState;
use crate::errors::LockerError;
use crate::tests::utils::{date, make_db, now};
use rusqlite::params;

fn exec(db: &Database, sql: &str) {
    db.with_conn(|conn| {
        conn.execute_batch(sql)
            .map_err(|e| LockerError::DbError(e.to_string()))
    })
    .unwrap();
}

#[test]
fn seeding_happens_once() {
    let db = make_db("seed_once");
    assert_eq!(seed_if_empty(&db).unwrap(), 6);
    assert_eq!(seed_if_empty(&db).unwrap(), 0);
    assert_eq!(count_guarantees(&db).unwrap(), 6);
}

#[test]
fn load_derives_status_and_documents() {
    let db = make_db("load_seeded");
    seed_if_empty(&db).unwrap();

    let records = load_guarantees(&db, now(), 45).unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].product_name, "Samsung Galaxy S24");
    assert_eq!(records[0].category, Category::Electronics);
    assert_eq!(records[0].purchase_amount, Money::inr(75000));
    assert_eq!(
        records[0].documents,
        vec!["warranty_card.pdf", "purchase_receipt.jpg"]
    );

    let sony = records.iter().find(|r| r.brand == "Sony").unwrap();
    assert_eq!(sony.status, Status::Expired);
    assert_eq!(records.iter().filter(|r| r.status == Status::Active).count(), 5);

    // Later in the year the LG fridge moves into the window.
    let march = date("2025-03-01").and_hms_opt(9, 0, 0).unwrap();
    let records = load_guarantees(&db, march, 45).unwrap();
    let lg = records.iter().find(|r| r.brand == "LG").unwrap();
    assert_eq!(lg.status, Status::ExpiringSoon);
}

#[test]
fn malformed_stored_date_is_a_data_error() {
    let db = make_db("bad_date");
    exec(
        &db,
        "INSERT INTO guarantees (id, product_name, brand, category, purchase_date, expiry_date,
                                 warranty_period, purchase_amount, currency, created_at)
         VALUES (1, 'Kettle', 'Prestige', 'Appliances', '2024-01-01', '15/12/2025',
                 '1 year', 1500, 'INR', '2024-01-01')",
    );

    assert!(matches!(
        load_guarantees(&db, now(), 45),
        Err(LockerError::DataError(_))
    ));
}

#[test]
fn unknown_stored_category_is_invalid_argument() {
    let db = make_db("bad_category");
    exec(
        &db,
        "INSERT INTO guarantees (id, product_name, brand, category, purchase_date, expiry_date,
                                 warranty_period, purchase_amount, currency, created_at)
         VALUES (1, 'Kettle', 'Prestige', 'Kitchen', '2024-01-01', '2025-01-01',
                 '1 year', 1500, 'INR', '2024-01-01')",
    );

    assert!(matches!(
        load_guarantees(&db, now(), 45),
        Err(LockerError::InvalidArgument(_))
    ));
}

#[test]
fn submitted_guarantees_are_loaded_back() {
    let db = make_db("submit");
    seed_if_empty(&db).unwrap();

    let form = GuaranteeForm {
        product_name: "Bosch Washer".to_string(),
        brand: "Bosch".to_string(),
        category: "Appliances".to_string(),
        purchase_date: "2024-06-01".to_string(),
        warranty_period: "2 years".to_string(),
        purchase_amount: "32500".to_string(),
        description: "Front load".to_string(),
        files: vec![FileDescriptor {
            original_name: "invoice.pdf".to_string(),
            size_bytes: 4096,
            content_type: "application/pdf".to_string(),
        }],
    };
    let doc = form.prepare().unwrap();
    let id = db.submit_document(&doc).unwrap();
    assert_eq!(id, 7);

    let records = load_guarantees(&db, now(), 45).unwrap();
    let washer = records.iter().find(|r| r.id == id).unwrap();
    assert_eq!(washer.expiry_date, date("2026-06-01"));
    assert_eq!(washer.warranty_period, "2 years");
    assert_eq!(washer.documents.len(), 1);
    assert!(washer.documents[0].starts_with("invoice_"));
    assert!(washer.documents[0].ends_with(".pdf"));

    let stored: (String, i64) = db
        .with_conn(|conn| {
            conn.query_row(
                "SELECT original_name, size_bytes FROM guarantee_documents WHERE guarantee_id = ?",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(|e| LockerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(stored, ("invoice.pdf".to_string(), 4096));
}

#[test]
fn preferences_round_trip() {
    let db = make_db("prefs");

    let state = ViewState {
        sort: SortCriteria::new(SortKey::Name, SortDirection::Desc),
        page: 4,
        ..ViewState::default()
    };
    assert_eq!(get_pref(&db, VIEW_STATE_KEY, ViewState::default()).unwrap(), ViewState::default());

    set_pref(&db, VIEW_STATE_KEY, &state).unwrap();
    assert_eq!(get_pref(&db, VIEW_STATE_KEY, ViewState::default()).unwrap(), state);

    // Overwrite in place.
    set_pref(&db, VIEW_STATE_KEY, &ViewState::default()).unwrap();
    assert_eq!(get_pref(&db, VIEW_STATE_KEY, state.clone()).unwrap(), ViewState::default());

    remove_pref(&db, VIEW_STATE_KEY).unwrap();
    assert_eq!(get_pref(&db, VIEW_STATE_KEY, state.clone()).unwrap(), state);
}

#[test]
fn unreadable_preference_falls_back_to_default() {
    let db = make_db("prefs_corrupt");
    exec(
        &db,
        "INSERT INTO preferences (key, value, updated_at) VALUES ('dgl_theme', '\"purple\"', '2025-01-01')",
    );
    assert_eq!(get_pref(&db, THEME_KEY, Theme::System).unwrap(), Theme::System);
}

#[test]
fn theme_toggles_and_persists() {
    let db = make_db("theme");
    assert_eq!(toggle_theme(&db).unwrap(), Theme::Light);
    assert_eq!(toggle_theme(&db).unwrap(), Theme::Dark);
    assert_eq!(get_pref(&db, THEME_KEY, Theme::System).unwrap(), Theme::Dark);

    clear_prefs(&db).unwrap();
    assert_eq!(get_pref(&db, THEME_KEY, Theme::System).unwrap(), Theme::System);
}

#[test]
fn recent_searches_are_deduplicated_and_capped() {
    let mut recent = Vec::new();
    for i in 0..12 {
        push_recent_search(&mut recent, &format!("q{i}"));
    }
    push_recent_search(&mut recent, "  q5 ");
    push_recent_search(&mut recent, "   ");

    assert_eq!(recent.len(), MAX_RECENT_SEARCHES);
    assert_eq!(recent[0], "q5");
    assert_eq!(recent[1], "q11");
    assert_eq!(recent.iter().filter(|q| *q == "q5").count(), 1);

    let db = make_db("recent");
    record_search(&db, "sony").unwrap();
    record_search(&db, "dell").unwrap();
    let stored = record_search(&db, "sony").unwrap();
    assert_eq!(stored, vec!["sony", "dell"]);
    assert_eq!(
        get_pref::<Vec<String>>(&db, RECENT_SEARCHES_KEY, Vec::new()).unwrap(),
        stored
    );
}

#[test]
fn remembered_ids_are_unique() {
    let db = make_db("ids");
    remember_id(&db, "ids", 3).unwrap();
    remember_id(&db, "ids", 3).unwrap();
    remember_id(&db, "ids", 1).unwrap();
    assert_eq!(get_pref::<Vec<i64>>(&db, "ids", Vec::new()).unwrap(), vec![3, 1]);
}

#[test]
fn oversized_amount_is_rejected_without_touching_the_table() {
    let db = make_db("oversized_amount");
    seed_if_empty(&db).unwrap();

    let doc = NewGuarantee {
        product_name: "Gold Watch".to_string(),
        brand: "Titan".to_string(),
        category: Category::Others,
        purchase_date: date("2024-06-01"),
        expiry_date: date("2025-06-01"),
        warranty_period: WarrantyPeriod::OneYear,
        purchase_amount: Money::inr(u64::MAX),
        description: None,
        files: vec![FileDescriptor {
            original_name: "bill.pdf".to_string(),
            size_bytes: 100,
            content_type: "application/pdf".to_string(),
        }],
    };
    assert!(matches!(db.submit_document(&doc), Err(LockerError::DataError(_))));

    assert_eq!(count_guarantees(&db).unwrap(), 6);
    assert_eq!(load_guarantees(&db, now(), 45).unwrap().len(), 6);
}
