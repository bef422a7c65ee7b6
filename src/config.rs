use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::domain::logic::{DASHBOARD_SOON_DAYS, LIST_SOON_DAYS};
use crate::domain::view::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub schema_path: PathBuf,
    pub out_dir: PathBuf,
    /// "Expiring Soon" window for the dashboard.
    pub dashboard_soon_days: i64,
    /// "Expiring Soon" window for the guarantee list and reminders.
    pub list_soon_days: i64,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("locker.sqlite3"),
            schema_path: PathBuf::from("sql/schema.sql"),
            out_dir: PathBuf::from("out"),
            dashboard_soon_days: DASHBOARD_SOON_DAYS,
            list_soon_days: LIST_SOON_DAYS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `load` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            db_path: try_load(&lookup, "LOCKER_DB_PATH", d.db_path),
            schema_path: try_load(&lookup, "LOCKER_SCHEMA_PATH", d.schema_path),
            out_dir: try_load(&lookup, "LOCKER_OUT_DIR", d.out_dir),
            dashboard_soon_days: try_load(&lookup, "LOCKER_DASHBOARD_SOON_DAYS", d.dashboard_soon_days),
            list_soon_days: try_load(&lookup, "LOCKER_LIST_SOON_DAYS", d.list_soon_days),
            page_size: try_load(&lookup, "LOCKER_PAGE_SIZE", d.page_size).clamp(1, MAX_PAGE_SIZE),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default:?}");
        default
    })
}
