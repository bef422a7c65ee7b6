// src/domain/sort.rs

use crate::domain::guarantee::GuaranteeRecord;
use crate::errors::{LockerError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sortable columns of the guarantee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Expiry,
    Status,
    Value,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Expiry => "expiry",
            SortKey::Status => "status",
            SortKey::Value => "value",
        }
    }

    /// Ascending comparison of two records on this column.
    pub fn compare(&self, a: &GuaranteeRecord, b: &GuaranteeRecord) -> Ordering {
        match self {
            SortKey::Name => compare_names(a, b),
            SortKey::Expiry => a.expiry_date.cmp(&b.expiry_date),
            // Plain label order: Active < Expired < Expiring Soon.
            SortKey::Status => a.status.label().cmp(b.status.label()),
            SortKey::Value => a.purchase_amount.amount.cmp(&b.purchase_amount.amount),
        }
    }
}

fn compare_names(a: &GuaranteeRecord, b: &GuaranteeRecord) -> Ordering {
    a.product_name
        .to_lowercase()
        .cmp(&b.product_name.to_lowercase())
}

impl FromStr for SortKey {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(SortKey::Name),
            "expiry" => Ok(SortKey::Expiry),
            "status" => Ok(SortKey::Status),
            "value" => Ok(SortKey::Value),
            other => Err(LockerError::InvalidArgument(format!(
                "unknown sort key '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(LockerError::InvalidArgument(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            key: SortKey::Expiry,
            direction: SortDirection::Asc,
        }
    }
}

impl SortCriteria {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column-header click: the same key flips direction, a new key starts ascending.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }

    pub fn compare(&self, a: &GuaranteeRecord, b: &GuaranteeRecord) -> Ordering {
        let ord = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Returns a new, stably sorted sequence; `records` is left as it was.
pub fn sort_records<'a>(
    records: &[&'a GuaranteeRecord],
    criteria: &SortCriteria,
) -> Vec<&'a GuaranteeRecord> {
    let mut out = records.to_vec();
    // `sort_by` is stable, and reversing `Equal` keeps ties in input order.
    out.sort_by(|a, b| criteria.compare(a, b));
    out
}
