// src/domain/logic.rs

use crate::domain::guarantee::{GuaranteeRecord, Status};
use chrono::{NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Default "Expiring Soon" window used by the dashboard.
pub const DASHBOARD_SOON_DAYS: i64 = 30;
/// Default "Expiring Soon" window used by the guarantee list and reminders.
pub const LIST_SOON_DAYS: i64 = 45;

/// Whole days from `now` until the start of `expiry`, rounded up.
///
/// A warranty expiring tomorrow at midnight, checked at noon today, has
/// one day left; one that expired this morning has zero.
pub fn days_until_expiry(expiry: NaiveDate, now: NaiveDateTime) -> i64 {
    let secs = (expiry.and_time(chrono::NaiveTime::MIN) - now).num_seconds();
    div_ceil(secs, SECONDS_PER_DAY)
}

fn div_ceil(n: i64, d: i64) -> i64 {
    let q = n / d;
    if n % d > 0 {
        q + 1
    } else {
        q
    }
}

/// Classifies a guarantee from its remaining days.
///
/// The checks run from most to least severe:
/// - negative days are `Expired`
/// - anything within `soon_days` (inclusive) is `ExpiringSoon`
/// - everything else is `Active`
pub fn derive_status(expiry: NaiveDate, now: NaiveDateTime, soon_days: i64) -> Status {
    status_for_days_left(days_until_expiry(expiry, now), soon_days)
}

pub fn status_for_days_left(days_left: i64, soon_days: i64) -> Status {
    if days_left < 0 {
        return Status::Expired;
    }
    if days_left <= soon_days {
        return Status::ExpiringSoon;
    }
    Status::Active
}

/// Copies of `records` with their status recomputed for `now` and `soon_days`.
/// Views with different "Expiring Soon" windows classify the same records differently.
pub fn reclassify(records: &[GuaranteeRecord], now: NaiveDateTime, soon_days: i64) -> Vec<GuaranteeRecord> {
    records
        .iter()
        .map(|r| GuaranteeRecord {
            status: derive_status(r.expiry_date, now, soon_days),
            ..r.clone()
        })
        .collect()
}
