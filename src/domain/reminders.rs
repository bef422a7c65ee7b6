// src/domain/reminders.rs

use crate::domain::guarantee::GuaranteeRecord;
use crate::domain::logic::days_until_expiry;
use crate::errors::{LockerError, Result};
use chrono::{Months, NaiveDate, NaiveDateTime};
use std::str::FromStr;

/// How long after a warranty lapses a renewal reminder stays in the inbox.
pub const RENEWAL_WINDOW_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Expiry,
    Maintenance,
    Renewal,
}

impl ReminderKind {
    /// Last digit of the reminder id; one guarantee has at most one reminder per kind.
    fn id_offset(&self) -> i64 {
        match self {
            ReminderKind::Expiry => 0,
            ReminderKind::Maintenance => 1,
            ReminderKind::Renewal => 2,
        }
    }
}

pub fn reminder_id(guarantee_id: i64, kind: ReminderKind) -> i64 {
    guarantee_id * 10 + kind.id_offset()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Urgency bands for expiry reminders.
    pub fn for_days_left(days_left: i64) -> Self {
        if days_left <= 14 {
            Priority::High
        } else if days_left <= 30 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: i64,
    pub guarantee_id: i64,
    pub product_name: String,
    pub kind: ReminderKind,
    pub date: NaiveDate,
    pub days_left: i64,
    pub priority: Priority,
    pub message: String,
    pub is_read: bool,
}

/// Tabs on the reminders screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderFilter {
    #[default]
    All,
    Unread,
    ExpiringSoon,
    Expired,
}

impl ReminderFilter {
    pub const ALL: [ReminderFilter; 4] = [
        ReminderFilter::All,
        ReminderFilter::Unread,
        ReminderFilter::ExpiringSoon,
        ReminderFilter::Expired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReminderFilter::All => "All Reminders",
            ReminderFilter::Unread => "Unread",
            ReminderFilter::ExpiringSoon => "Expiring Soon",
            ReminderFilter::Expired => "Expired",
        }
    }

    pub fn matches(&self, r: &Reminder) -> bool {
        match self {
            ReminderFilter::All => true,
            ReminderFilter::Unread => !r.is_read,
            ReminderFilter::ExpiringSoon => r.kind == ReminderKind::Expiry && r.days_left > 0,
            ReminderFilter::Expired => r.days_left < 0,
        }
    }
}

impl FromStr for ReminderFilter {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(ReminderFilter::All),
            "unread" => Ok(ReminderFilter::Unread),
            "expiry" => Ok(ReminderFilter::ExpiringSoon),
            "expired" => Ok(ReminderFilter::Expired),
            other => Err(LockerError::InvalidArgument(format!(
                "unknown reminder filter '{other}'"
            ))),
        }
    }
}

/// An owned list of reminders with the read/dismiss actions of the inbox.
#[derive(Debug, Clone, Default)]
pub struct ReminderInbox {
    reminders: Vec<Reminder>,
}

impl ReminderInbox {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self { reminders }
    }

    pub fn all(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn filtered(&self, filter: ReminderFilter) -> Vec<&Reminder> {
        self.reminders.iter().filter(|r| filter.matches(r)).collect()
    }

    /// (filter, count) for every tab, in display order.
    pub fn counts(&self) -> Vec<(ReminderFilter, usize)> {
        ReminderFilter::ALL
            .into_iter()
            .map(|f| (f, self.reminders.iter().filter(|r| f.matches(r)).count()))
            .collect()
    }

    pub fn mark_read(&mut self, id: i64) -> Result<()> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(LockerError::NotFound)?;
        reminder.is_read = true;
        Ok(())
    }

    pub fn remove(&mut self, id: i64) -> Result<Reminder> {
        let idx = self
            .reminders
            .iter()
            .position(|r| r.id == id)
            .ok_or(LockerError::NotFound)?;
        Ok(self.reminders.remove(idx))
    }
}

/// Every reminder the inbox shows for `records`, most urgent first.
///
/// A guarantee can produce an expiry reminder (lapsed, or due within
/// `soon_days`), a maintenance reminder (the next purchase anniversary falls
/// within `soon_days` while still covered) and a renewal reminder (lapsed no
/// more than [`RENEWAL_WINDOW_DAYS`] ago).
pub fn build_reminders(
    records: &[GuaranteeRecord],
    now: NaiveDateTime,
    soon_days: i64,
) -> Vec<Reminder> {
    let mut out: Vec<Reminder> = records
        .iter()
        .flat_map(|r| {
            [
                expiry_reminder(r, now, soon_days),
                maintenance_reminder(r, now, soon_days),
                renewal_reminder(r, now),
            ]
        })
        .flatten()
        .collect();

    // Stable, so reminders for the same day keep record order.
    out.sort_by_key(|r| r.days_left);
    out
}

fn reminder(
    r: &GuaranteeRecord,
    kind: ReminderKind,
    date: NaiveDate,
    days_left: i64,
    priority: Priority,
    message: String,
) -> Reminder {
    Reminder {
        id: reminder_id(r.id, kind),
        guarantee_id: r.id,
        product_name: r.product_name.clone(),
        kind,
        date,
        days_left,
        priority,
        message,
        is_read: false,
    }
}

fn expiry_reminder(r: &GuaranteeRecord, now: NaiveDateTime, soon_days: i64) -> Option<Reminder> {
    let days_left = days_until_expiry(r.expiry_date, now);
    if days_left > soon_days {
        return None;
    }
    let message = if days_left < 0 {
        "Warranty has expired. Product is no longer covered.".to_string()
    } else {
        format!("Warranty expires in {days_left} days. Consider service check or extended warranty.")
    };
    Some(reminder(
        r,
        ReminderKind::Expiry,
        r.expiry_date,
        days_left,
        Priority::for_days_left(days_left),
        message,
    ))
}

/// First anniversary of `purchase` that is not before `today`.
fn next_anniversary(purchase: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    (1u32..)
        .map(|years| purchase.checked_add_months(Months::new(12 * years)))
        .take_while(Option::is_some)
        .flatten()
        .find(|d| *d >= today)
}

fn maintenance_reminder(r: &GuaranteeRecord, now: NaiveDateTime, soon_days: i64) -> Option<Reminder> {
    let due = next_anniversary(r.purchase_date, now.date())?;
    // On the expiry date itself the expiry reminder covers it.
    if due >= r.expiry_date {
        return None;
    }
    let days_left = days_until_expiry(due, now);
    if days_left > soon_days {
        return None;
    }
    Some(reminder(
        r,
        ReminderKind::Maintenance,
        due,
        days_left,
        Priority::for_days_left(days_left),
        "Recommended service check-up for optimal performance.".to_string(),
    ))
}

fn renewal_reminder(r: &GuaranteeRecord, now: NaiveDateTime) -> Option<Reminder> {
    let days_left = days_until_expiry(r.expiry_date, now);
    if !(-RENEWAL_WINDOW_DAYS..0).contains(&days_left) {
        return None;
    }
    Some(reminder(
        r,
        ReminderKind::Renewal,
        r.expiry_date,
        days_left,
        Priority::Medium,
        "Consider renewing extended warranty for continued protection.".to_string(),
    ))
}
