// src/domain/upload.rs

use crate::domain::guarantee::{parse_date, Category, Money};
use crate::errors::{FormErrors, LockerError, Result};
use base64::Engine;
use chrono::{Months, NaiveDate};
use rand::RngCore;
use serde::Serialize;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError};

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const ALLOWED_FILE_TYPES: [&str; 9] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

const SUFFIX_BYTES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyPeriod {
    SixMonths,
    OneYear,
    TwoYears,
    ThreeYears,
    FiveYears,
    Lifetime,
}

impl WarrantyPeriod {
    pub const ALL: [WarrantyPeriod; 6] = [
        WarrantyPeriod::SixMonths,
        WarrantyPeriod::OneYear,
        WarrantyPeriod::TwoYears,
        WarrantyPeriod::ThreeYears,
        WarrantyPeriod::FiveYears,
        WarrantyPeriod::Lifetime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WarrantyPeriod::SixMonths => "6 months",
            WarrantyPeriod::OneYear => "1 year",
            WarrantyPeriod::TwoYears => "2 years",
            WarrantyPeriod::ThreeYears => "3 years",
            WarrantyPeriod::FiveYears => "5 years",
            WarrantyPeriod::Lifetime => "Lifetime",
        }
    }

    /// Lifetime cover is tracked as a hundred years.
    pub fn months(&self) -> u32 {
        match self {
            WarrantyPeriod::SixMonths => 6,
            WarrantyPeriod::OneYear => 12,
            WarrantyPeriod::TwoYears => 24,
            WarrantyPeriod::ThreeYears => 36,
            WarrantyPeriod::FiveYears => 60,
            WarrantyPeriod::Lifetime => 1200,
        }
    }

    pub fn expiry_from(&self, purchase: NaiveDate) -> Result<NaiveDate> {
        let m = self.months();
        purchase
            .checked_add_months(Months::new(m))
            .ok_or_else(|| LockerError::DataError(format!("{purchase} + {m} months is out of range")))
    }
}

impl FromStr for WarrantyPeriod {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        WarrantyPeriod::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| LockerError::InvalidArgument(format!("unknown warranty period '{s}'")))
    }
}

/// A file picked in the upload form. Only its metadata reaches this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    pub original_name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

/// Raw upload form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct GuaranteeForm {
    #[validate(length(min = 3, max = 100, message = "Product name must be 3 to 100 characters"))]
    pub product_name: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    pub category: String,
    pub purchase_date: String,
    pub warranty_period: String,
    pub purchase_amount: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,
    #[validate(
        length(min = 1, max = 5, message = "Attach between 1 and 5 documents"),
        custom(function = "validate_documents")
    )]
    pub files: Vec<FileDescriptor>,
}

/// A validated upload, ready to hand to a [`DocumentSubmitter`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewGuarantee {
    pub product_name: String,
    pub brand: String,
    pub category: Category,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub warranty_period: WarrantyPeriod,
    pub purchase_amount: Money,
    pub description: Option<String>,
    pub files: Vec<FileDescriptor>,
}

/// Persists a validated upload and returns the new guarantee id.
/// The view layer never calls this; the caller owning the form does.
pub trait DocumentSubmitter {
    fn submit_document(&self, doc: &NewGuarantee) -> Result<i64>;
}

impl GuaranteeForm {
    fn trimmed(&self) -> Self {
        Self {
            product_name: self.product_name.trim().to_string(),
            brand: self.brand.trim().to_string(),
            description: self.description.trim().to_string(),
            ..self.clone()
        }
    }

    /// Checks every field and collects all problems instead of stopping at the first.
    ///
    /// Length and count rules are declared on the struct; the fields that
    /// have to parse into typed values are checked here.
    pub fn prepare(&self) -> std::result::Result<NewGuarantee, FormErrors> {
        let form = self.trimmed();
        let mut errors = match form.validate() {
            Ok(()) => FormErrors::default(),
            Err(e) => FormErrors::from(&e),
        };

        let category = form
            .category
            .parse::<Category>()
            .map_err(|_| errors.add("category", "Please select a category"))
            .ok();

        let purchase_date = parse_date(&form.purchase_date)
            .map_err(|_| errors.add("purchase_date", "Purchase date must be YYYY-MM-DD"))
            .ok();

        let warranty_period = form
            .warranty_period
            .parse::<WarrantyPeriod>()
            .map_err(|_| errors.add("warranty_period", "Please select a warranty period"))
            .ok();

        let purchase_amount = if form.purchase_amount.trim().is_empty() {
            Some(Money::inr(0))
        } else {
            Money::parse_display(&form.purchase_amount, "INR")
                .map_err(|e| errors.add("purchase_amount", amount_message(&e)))
                .ok()
        };

        let expiry_date = match (purchase_date, warranty_period) {
            (Some(date), Some(period)) => period
                .expiry_from(date)
                .map_err(|e| errors.add("warranty_period", e.to_string()))
                .ok(),
            _ => None,
        };

        match (category, purchase_date, warranty_period, purchase_amount, expiry_date) {
            (Some(category), Some(purchase_date), Some(warranty_period), Some(purchase_amount), Some(expiry_date))
                if errors.is_empty() =>
            {
                Ok(NewGuarantee {
                    category,
                    purchase_date,
                    expiry_date,
                    warranty_period,
                    purchase_amount,
                    description: (!form.description.is_empty()).then(|| form.description.clone()),
                    product_name: form.product_name,
                    brand: form.brand,
                    files: form.files,
                })
            }
            _ => Err(errors),
        }
    }
}

fn amount_message(e: &LockerError) -> String {
    match e {
        LockerError::DataError(msg) if msg.contains("too large") => "Amount is too large".to_string(),
        _ => "Amount must be a number".to_string(),
    }
}

fn file_error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

/// Per-file size and type checks. The file count is checked by `length`.
fn validate_documents(files: &[FileDescriptor]) -> std::result::Result<(), ValidationError> {
    for f in files {
        if f.size_bytes > MAX_FILE_SIZE {
            return Err(file_error(
                "file_size",
                format!(
                    "{}: file size must be less than {}MB",
                    f.original_name,
                    MAX_FILE_SIZE / (1024 * 1024)
                ),
            ));
        }
        if !is_allowed_type(&f.content_type) {
            return Err(file_error(
                "file_type",
                format!("{}: invalid file type", f.original_name),
            ));
        }
    }
    Ok(())
}

/// Compares the MIME essence, so parameters such as `charset` are ignored.
pub fn is_allowed_type(content_type: &str) -> bool {
    content_type
        .parse::<mime::Mime>()
        .map(|m| ALLOWED_FILE_TYPES.contains(&m.essence_str()))
        .unwrap_or(false)
}

/// Text after the last dot, or "" when there is none.
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    }
}

/// `<stem>_<unix_ts>_<random>.<ext>`, with a URL-safe random suffix.
pub fn generate_unique_file_name<R: RngCore>(rng: &mut R, original: &str, now_unix: i64) -> String {
    let mut buf = [0u8; SUFFIX_BYTES];
    rng.fill_bytes(&mut buf);
    let suffix = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf);

    let ext = file_extension(original);
    if ext.is_empty() {
        format!("{original}_{now_unix}_{suffix}")
    } else {
        let stem = &original[..original.len() - ext.len() - 1];
        format!("{stem}_{now_unix}_{suffix}.{ext}")
    }
}
