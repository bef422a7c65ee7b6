// src/domain/guarantee.rs

use crate::errors::{LockerError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product categories a guarantee can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Appliances,
    Furniture,
    Automotive,
    HomeAndGarden,
    SportsAndFitness,
    FashionAndAccessories,
    Others,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::Appliances,
        Category::Furniture,
        Category::Automotive,
        Category::HomeAndGarden,
        Category::SportsAndFitness,
        Category::FashionAndAccessories,
        Category::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Appliances => "Appliances",
            Category::Furniture => "Furniture",
            Category::Automotive => "Automotive",
            Category::HomeAndGarden => "Home & Garden",
            Category::SportsAndFitness => "Sports & Fitness",
            Category::FashionAndAccessories => "Fashion & Accessories",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| LockerError::InvalidArgument(format!("unknown category '{s}'")))
    }
}

/// Lifecycle band of a guarantee relative to "now".
///
/// The status column sorts by `label()`, not by variant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    ExpiringSoon,
    Expired,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::ExpiringSoon, Status::Expired];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::ExpiringSoon => "Expiring Soon",
            Status::Expired => "Expired",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|st| st.label() == s)
            .ok_or_else(|| LockerError::InvalidArgument(format!("unknown status '{s}'")))
    }
}

/// A non-negative purchase amount in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: u64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn inr(amount: u64) -> Self {
        Self::new(amount, "INR")
    }

    /// Parses a display string such as "₹89,999" by dropping every non-digit
    /// character before the first decimal point.
    pub fn parse_display(display: &str, currency: &str) -> Result<Self> {
        let digits: String = display
            .split('.')
            .next()
            .unwrap_or_default()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        if digits.is_empty() {
            return Err(LockerError::DataError(format!(
                "amount '{display}' has no digits"
            )));
        }

        let amount = digits
            .parse::<u64>()
            .map_err(|e| LockerError::DataError(format!("amount '{display}': {e}")))?;

        // Amounts are stored as signed 64-bit integers.
        if i64::try_from(amount).is_err() {
            return Err(LockerError::DataError(format!("amount '{display}' is too large")));
        }

        Ok(Self::new(amount, currency))
    }

    pub fn symbol(&self) -> &str {
        currency_symbol(&self.currency)
    }
}

pub fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        "JPY" | "CNY" => "¥",
        "CAD" => "C$",
        "AUD" => "A$",
        "KRW" => "₩",
        other => other,
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| LockerError::DataError(format!("malformed date '{s}': {e}")))
}

/// One tracked warranty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuaranteeRecord {
    pub id: i64,
    pub product_name: String,
    pub brand: String,
    pub category: Category,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub warranty_period: String,
    pub purchase_amount: Money,
    pub status: Status,
    pub documents: Vec<String>,
}

/// Everything needed to build a record except the derived status.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub id: i64,
    pub product_name: String,
    pub brand: String,
    pub category: Category,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub warranty_period: String,
    pub purchase_amount: Money,
    pub documents: Vec<String>,
}

impl GuaranteeRecord {
    /// Builds a record, checking that the warranty does not end before the purchase.
    pub fn new(fields: RecordFields, status: Status) -> Result<Self> {
        if fields.expiry_date < fields.purchase_date {
            return Err(LockerError::DataError(format!(
                "guarantee {} expires ({}) before purchase ({})",
                fields.id, fields.expiry_date, fields.purchase_date
            )));
        }

        Ok(Self {
            id: fields.id,
            product_name: fields.product_name,
            brand: fields.brand,
            category: fields.category,
            purchase_date: fields.purchase_date,
            expiry_date: fields.expiry_date,
            warranty_period: fields.warranty_period,
            purchase_amount: fields.purchase_amount,
            status,
            documents: fields.documents,
        })
    }
}
