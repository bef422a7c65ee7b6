// src/snapshot.rs
//
// Renders every screen of the locker to static files: the dashboard, the
// guarantee list as the saved view state describes it, the reminders inbox,
// and an XLSX export of the full (unpaged) list view.

use crate::config::Config;
use crate::db::connection::Database;
use crate::db::guarantees::load_guarantees;
use crate::db::preferences::{
    get_pref, set_pref, Theme, DISMISSED_REMINDERS_KEY, READ_REMINDERS_KEY, RECENT_SEARCHES_KEY,
    THEME_KEY, VIEW_STATE_KEY,
};
use crate::domain::filter::{present_categories, FilterCriteria};
use crate::domain::guarantee::GuaranteeRecord;
use crate::domain::logic::reclassify;
use crate::domain::reminders::{build_reminders, ReminderFilter, ReminderInbox};
use crate::domain::stats::dashboard_stats;
use crate::domain::view::{compute_view, ViewState};
use crate::errors::LockerError;
use crate::spreadsheets::export_guarantees_xlsx;
use crate::templates::pages::{dashboard_page, guarantees_page, reminders_page, DashboardVm, GuaranteesVm};
use chrono::NaiveDateTime;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug)]
pub struct SnapshotSummary {
    pub total_records: usize,
    pub shown_in_list: usize,
    pub reminders: usize,
    pub files: Vec<PathBuf>,
}

/// The saved view state, or a fresh one using the configured page size.
pub fn load_view_state(db: &Database, cfg: &Config) -> Result<ViewState, LockerError> {
    let fresh = ViewState {
        page_size: cfg.page_size,
        ..ViewState::default()
    };
    get_pref(db, VIEW_STATE_KEY, fresh)
}

/// Builds the reminder inbox for `records` and replays the read and
/// dismissed ids stored in preferences. Ids that no longer have a
/// reminder are skipped.
pub fn load_inbox(
    db: &Database,
    records: &[GuaranteeRecord],
    now: NaiveDateTime,
    soon_days: i64,
) -> Result<ReminderInbox, LockerError> {
    let mut inbox = ReminderInbox::new(build_reminders(records, now, soon_days));

    let read: Vec<i64> = get_pref(db, READ_REMINDERS_KEY, Vec::new())?;
    for id in read {
        match inbox.mark_read(id) {
            Ok(()) | Err(LockerError::NotFound) => {}
            Err(e) => return Err(e),
        }
    }

    let dismissed: Vec<i64> = get_pref(db, DISMISSED_REMINDERS_KEY, Vec::new())?;
    for id in dismissed {
        match inbox.remove(id) {
            Ok(_) | Err(LockerError::NotFound) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(inbox)
}

pub fn render_snapshot(
    cfg: &Config,
    db: &Database,
    now: NaiveDateTime,
    reminder_tab: ReminderFilter,
) -> Result<SnapshotSummary, LockerError> {
    let theme: Theme = get_pref(db, THEME_KEY, Theme::default())?;
    let recent_searches: Vec<String> = get_pref(db, RECENT_SEARCHES_KEY, Vec::new())?;
    let state = load_view_state(db, cfg)?;
    debug!(?state, "loaded view state");

    let list_records = load_guarantees(db, now, cfg.list_soon_days)?;
    let dashboard_records = reclassify(&list_records, now, cfg.dashboard_soon_days);

    fs::create_dir_all(&cfg.out_dir)?;
    let mut files = Vec::new();

    // Dashboard: every record, sorted the way the user last sorted.
    let dashboard_rows = compute_view(&dashboard_records, &FilterCriteria::default(), &state.sort);
    let dashboard = dashboard_page(&DashboardVm {
        stats: dashboard_stats(&dashboard_records),
        rows: dashboard_rows,
        sort: state.sort,
        now,
        soon_days: cfg.dashboard_soon_days,
        theme,
    });
    files.push(write_file(cfg, "dashboard.html", dashboard.into_string().as_bytes())?);

    // Guarantee list, paged.
    let page = state.render(&list_records);
    let shown_in_list = page.total_count;
    let list = guarantees_page(&GuaranteesVm {
        state: &state,
        page,
        total_records: list_records.len(),
        categories: present_categories(&list_records),
        recent_searches,
        now,
        theme,
    });
    files.push(write_file(cfg, "guarantees.html", list.into_string().as_bytes())?);

    // Reminders.
    let inbox = load_inbox(db, &list_records, now, cfg.list_soon_days)?;
    let reminders = reminders_page(&inbox, reminder_tab, theme);
    files.push(write_file(cfg, "reminders.html", reminders.into_string().as_bytes())?);

    // Export of the whole filtered + sorted list.
    let export_rows = compute_view(&list_records, &state.filter, &state.sort);
    let xlsx = export_guarantees_xlsx(&export_rows)?;
    files.push(write_file(cfg, "guarantees.xlsx", &xlsx)?);

    set_pref(db, VIEW_STATE_KEY, &state)?;

    info!(
        records = list_records.len(),
        shown = shown_in_list,
        reminders = inbox.all().len(),
        out = %cfg.out_dir.display(),
        "snapshot rendered"
    );

    Ok(SnapshotSummary {
        total_records: list_records.len(),
        shown_in_list,
        reminders: inbox.all().len(),
        files,
    })
}

fn write_file(cfg: &Config, name: &str, bytes: &[u8]) -> Result<PathBuf, LockerError> {
    let path = cfg.out_dir.join(name);
    fs::write(&path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(path)
}
