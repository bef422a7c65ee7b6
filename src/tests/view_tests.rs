// src/tests/view_tests.rs

use crate::domain::filter::{FilterCriteria, Selection};
use crate::domain::guarantee::{Category, GuaranteeRecord};
use crate::domain::sort::{SortCriteria, SortDirection, SortKey};
use crate::domain::view::{compute_view, paginate, ViewMode, ViewState, MAX_PAGE_SIZE};
use crate::errors::LockerError;
use crate::tests::utils::{mixed_records, names, record};

#[test]
fn compute_view_filters_then_sorts() {
    let records = mixed_records();
    let filter = FilterCriteria::parse("", "Electronics", "All").unwrap();
    let sort = SortCriteria::new(SortKey::Value, SortDirection::Desc);

    let view = compute_view(&records, &filter, &sort);
    assert_eq!(
        names(&view),
        vec!["Dell Inspiron Laptop", "Sony Headphones", "Philips Trimmer"]
    );
}

#[test]
fn compute_view_is_repeatable() {
    let records = mixed_records();
    let filter = FilterCriteria::default();
    let sort = SortCriteria::new(SortKey::Name, SortDirection::Asc);
    assert_eq!(
        compute_view(&records, &filter, &sort),
        compute_view(&records, &filter, &sort)
    );
}

fn many(n: i64) -> Vec<GuaranteeRecord> {
    (1..=n)
        .map(|i| record(i, &format!("Item {i:02}"), "Brand", Category::Others, "2026-01-01", i as u64))
        .collect()
}

#[test]
fn paginate_slices_pages() {
    let records = many(23);
    let view: Vec<&GuaranteeRecord> = records.iter().collect();

    let first = paginate(&view, 1, 10);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_count, 23);
    assert!(first.has_more);

    let last = paginate(&view, 3, 10);
    assert_eq!(names(&last.items), vec!["Item 21", "Item 22", "Item 23"]);
    assert!(!last.has_more);
}

#[test]
fn paginate_edge_cases() {
    let records = many(5);
    let view: Vec<&GuaranteeRecord> = records.iter().collect();

    // Page 0 reads as page 1.
    let zero = paginate(&view, 0, 2);
    assert_eq!(zero.current_page, 1);
    assert_eq!(names(&zero.items), vec!["Item 01", "Item 02"]);

    // Past the end is empty, not an error.
    let past = paginate(&view, 9, 2);
    assert!(past.items.is_empty());
    assert_eq!(past.total_pages, 3);

    // Size is clamped.
    assert_eq!(paginate(&view, 1, 0).page_size, 1);
    assert_eq!(paginate(&view, 1, 10_000).page_size, MAX_PAGE_SIZE);

    let empty = paginate(&[], 1, 10);
    assert_eq!(empty.total_pages, 0);
    assert!(empty.items.is_empty());
    assert!(!empty.has_more);
}

#[test]
fn changing_the_filter_resets_the_page() {
    let state = ViewState {
        page: 3,
        ..ViewState::default()
    };

    let same = state.clone().with_filter(FilterCriteria::default());
    assert_eq!(same.page, 3);

    let narrowed = state.with_filter(FilterCriteria {
        category: Selection::Only(Category::Furniture),
        ..FilterCriteria::default()
    });
    assert_eq!(narrowed.page, 1);
}

#[test]
fn sort_clicks_keep_the_page() {
    let state = ViewState {
        page: 2,
        ..ViewState::default()
    };
    let clicked = state.with_sort_click(SortKey::Expiry);
    assert_eq!(clicked.sort, SortCriteria::new(SortKey::Expiry, SortDirection::Desc));
    assert_eq!(clicked.page, 2);
}

#[test]
fn view_state_renders_a_page() {
    let records = mixed_records();
    let state = ViewState {
        page_size: 2,
        ..ViewState::default()
    };
    let page = state.render(&records);
    // Default sort is soonest expiry first.
    assert_eq!(names(&page.items), vec!["Sony Headphones", "Philips Trimmer"]);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn view_state_survives_json() {
    let state = ViewState {
        filter: FilterCriteria::parse("dell", "Electronics", "Active").unwrap(),
        sort: SortCriteria::new(SortKey::Value, SortDirection::Desc),
        page: 2,
        page_size: 25,
        mode: ViewMode::Grid,
    };
    let json = serde_json::to_string(&state).unwrap();
    let back: ViewState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn view_mode_parsing() {
    assert_eq!("grid".parse::<ViewMode>().unwrap(), ViewMode::Grid);
    assert!(matches!("table".parse::<ViewMode>(), Err(LockerError::InvalidArgument(_))));
}
