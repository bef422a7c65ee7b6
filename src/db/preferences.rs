// src/db/preferences.rs
use crate::db::connection::Database;
use crate::errors::LockerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const THEME_KEY: &str = "dgl_theme";
pub const VIEW_STATE_KEY: &str = "dgl_view_state";
pub const RECENT_SEARCHES_KEY: &str = "dgl_recent_searches";
pub const READ_REMINDERS_KEY: &str = "dgl_read_reminders";
pub const DISMISSED_REMINDERS_KEY: &str = "dgl_dismissed_reminders";

pub const MAX_RECENT_SEARCHES: usize = 10;

/// Reads a JSON preference. A missing key, or a value that no longer
/// deserializes into `T`, yields `default`.
pub fn get_pref<T: DeserializeOwned>(db: &Database, key: &str, default: T) -> Result<T, LockerError> {
    let raw: Option<String> = db.with_conn(|conn| {
        conn.query_row(
            "SELECT value FROM preferences WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| LockerError::DbError(format!("read preference '{key}' failed: {e}")))
    })?;

    match raw {
        None => Ok(default),
        Some(json) => match serde_json::from_str(&json) {
            Ok(v) => Ok(v),
            Err(e) => {
                warn!(key, error = %e, "stored preference is unreadable, using default");
                Ok(default)
            }
        },
    }
}

pub fn set_pref<T: Serialize>(db: &Database, key: &str, value: &T) -> Result<(), LockerError> {
    let json = serde_json::to_string(value)
        .map_err(|e| LockerError::DataError(format!("encode preference '{key}': {e}")))?;
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, json, now],
        )
        .map_err(|e| LockerError::DbError(format!("write preference '{key}' failed: {e}")))?;
        Ok(())
    })
}

pub fn remove_pref(db: &Database, key: &str) -> Result<(), LockerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM preferences WHERE key = ?", params![key])
            .map_err(|e| LockerError::DbError(format!("remove preference '{key}' failed: {e}")))?;
        Ok(())
    })
}

pub fn clear_prefs(db: &Database) -> Result<(), LockerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM preferences", [])
            .map_err(|e| LockerError::DbError(format!("clear preferences failed: {e}")))?;
        Ok(())
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Light and dark swap; "system" resolves to light on the first toggle.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark | Theme::System => Theme::Light,
        }
    }
}

pub fn toggle_theme(db: &Database) -> Result<Theme, LockerError> {
    let next = get_pref(db, THEME_KEY, Theme::default())?.toggled();
    set_pref(db, THEME_KEY, &next)?;
    Ok(next)
}

/// Puts `query` at the front of the recent-search list, dropping any older
/// copy and anything past `MAX_RECENT_SEARCHES`. Blank queries are ignored.
pub fn push_recent_search(recent: &mut Vec<String>, query: &str) {
    let query = query.trim();
    if query.is_empty() {
        return;
    }
    recent.retain(|q| q != query);
    recent.insert(0, query.to_string());
    recent.truncate(MAX_RECENT_SEARCHES);
}

pub fn record_search(db: &Database, query: &str) -> Result<Vec<String>, LockerError> {
    let mut recent: Vec<String> = get_pref(db, RECENT_SEARCHES_KEY, Vec::new())?;
    push_recent_search(&mut recent, query);
    set_pref(db, RECENT_SEARCHES_KEY, &recent)?;
    Ok(recent)
}

/// Adds `id` to an id-list preference, keeping it free of duplicates.
pub fn remember_id(db: &Database, key: &str, id: i64) -> Result<(), LockerError> {
    let mut ids: Vec<i64> = get_pref(db, key, Vec::new())?;
    if !ids.contains(&id) {
        ids.push(id);
        set_pref(db, key, &ids)?;
    }
    Ok(())
}
