// src/domain/stats.rs

use crate::domain::guarantee::{Category, GuaranteeRecord, Status};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub category: Category,
    pub count: usize,
    /// Share of all guarantees, rounded to one decimal place.
    pub percentage: f64,
    pub total_value: u64,
}

/// Headline numbers shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub total_value: u64,
    pub categories: Vec<CategoryStats>,
}

pub fn dashboard_stats(records: &[GuaranteeRecord]) -> DashboardStats {
    let count_status = |s: Status| records.iter().filter(|r| r.status == s).count();

    let mut by_category: HashMap<Category, (usize, u64)> = HashMap::new();
    for r in records {
        let entry = by_category.entry(r.category).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += r.purchase_amount.amount;
    }

    let total = records.len();
    let mut categories: Vec<CategoryStats> = by_category
        .into_iter()
        .map(|(category, (count, total_value))| CategoryStats {
            category,
            count,
            percentage: round_to(count as f64 * 100.0 / total as f64, 1),
            total_value,
        })
        .collect();

    // Biggest buckets first; label breaks ties so the output is deterministic.
    categories.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });

    DashboardStats {
        total,
        active: count_status(Status::Active),
        expiring_soon: count_status(Status::ExpiringSoon),
        expired: count_status(Status::Expired),
        total_value: records.iter().map(|r| r.purchase_amount.amount).sum(),
        categories,
    }
}

fn round_to(n: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (n * factor).round() / factor
}
