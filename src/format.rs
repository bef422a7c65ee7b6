// src/format.rs
//! Display helpers shared by the page renderers and the spreadsheet export.

use crate::domain::guarantee::Money;
use chrono::{NaiveDate, NaiveDateTime};

/// 1234567 -> "1,234,567"
pub fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_money(m: &Money) -> String {
    format!("{}{}", m.symbol(), with_commas(m.amount))
}

/// "Aug 15, 2025"
pub fn short_date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// "Friday, August 15, 2025"
pub fn long_date(d: NaiveDate) -> String {
    d.format("%A, %B %-d, %Y").to_string()
}

/// Whole calendar days between today and `target`, phrased for people.
pub fn relative_day(target: NaiveDate, now: NaiveDateTime) -> String {
    let diff = (target - now.date()).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        d if d > 1 => format!("In {d} days"),
        d => format!("{} days ago", d.abs()),
    }
}

pub fn days_left_text(days_left: i64) -> String {
    match days_left {
        d if d > 0 => format!("{d} days left"),
        0 => "Due today".to_string(),
        d => format!("Overdue by {} days", d.abs()),
    }
}

/// 1536 -> "1.5 KB"
pub fn file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let rounded = (size * 100.0).round() / 100.0;
    // Drop trailing zeros: 1.50 -> 1.5, 2.00 -> 2
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text} {}", UNITS[unit])
}
