// src/domain/filter.rs

use crate::domain::guarantee::{Category, GuaranteeRecord, Status};
use crate::errors::{LockerError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A dropdown selector: either everything, or one value of a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr<Err = LockerError>> FromStr for Selection<T> {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "All" {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Matched as a case-insensitive substring of product name or brand.
    /// Only the empty string disables the search; whitespace is searched for literally.
    pub search: String,
    pub category: Selection<Category>,
    pub status: Selection<Status>,
}

impl FilterCriteria {
    /// Builds criteria from the raw strings a form or query would carry.
    pub fn parse(search: &str, category: &str, status: &str) -> Result<Self> {
        Ok(Self {
            search: search.to_string(),
            category: category.parse()?,
            status: status.parse()?,
        })
    }

    pub fn matches(&self, record: &GuaranteeRecord) -> bool {
        self.matches_search(record)
            && self.category.admits(&record.category)
            && self.status.admits(&record.status)
    }

    fn matches_search(&self, record: &GuaranteeRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.product_name.to_lowercase().contains(&needle)
            || record.brand.to_lowercase().contains(&needle)
    }
}

/// Records satisfying `criteria`, in their original order.
pub fn filter_records<'a>(
    records: &'a [GuaranteeRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a GuaranteeRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Distinct categories present in `records`, in first-seen order.
/// Feeds the category dropdown, which always leads with "All".
pub fn present_categories(records: &[GuaranteeRecord]) -> Vec<Category> {
    let mut out: Vec<Category> = Vec::new();
    for r in records {
        if !out.contains(&r.category) {
            out.push(r.category);
        }
    }
    out
}
