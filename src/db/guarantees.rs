// src/db/guarantees.rs
use crate::db::connection::Database;
use crate::domain::guarantee::{parse_date, Category, GuaranteeRecord, Money, RecordFields};
use crate::domain::logic::derive_status;
use crate::domain::seed::sample_guarantees;
use crate::domain::upload::{generate_unique_file_name, DocumentSubmitter, NewGuarantee};
use crate::errors::LockerError;
use chrono::{NaiveDateTime, Utc};
use rand::rngs::OsRng;
use rusqlite::{params, Connection};
use std::collections::HashMap;
use tracing::{debug, info};

const DATE_FMT: &str = "%Y-%m-%d";

pub fn insert_guarantee(conn: &Connection, g: &RecordFields) -> Result<(), LockerError> {
    let now = Utc::now().naive_utc();

    conn.execute(
        r#"
        INSERT INTO guarantees (
            id, product_name, brand, category, purchase_date, expiry_date,
            warranty_period, purchase_amount, currency, created_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        "#,
        params![
            g.id,
            g.product_name,
            g.brand,
            g.category.label(),
            g.purchase_date.format(DATE_FMT).to_string(),
            g.expiry_date.format(DATE_FMT).to_string(),
            g.warranty_period,
            stored_amount(&g.purchase_amount)?,
            g.purchase_amount.currency,
            now,
        ],
    )
    .map_err(|e| LockerError::DbError(format!("insert guarantee {} failed: {e}", g.id)))?;

    for name in &g.documents {
        conn.execute(
            r#"
            INSERT INTO guarantee_documents (guarantee_id, file_name, original_name)
            VALUES (?1, ?2, ?2)
            "#,
            params![g.id, name],
        )
        .map_err(|e| LockerError::DbError(format!("insert document failed: {e}")))?;
    }

    Ok(())
}

fn stored_amount(money: &Money) -> Result<i64, LockerError> {
    i64::try_from(money.amount).map_err(|_| {
        LockerError::DataError(format!("amount {} does not fit the amount column", money.amount))
    })
}

fn stored_size(bytes: u64) -> Result<i64, LockerError> {
    i64::try_from(bytes)
        .map_err(|_| LockerError::DataError(format!("file size {bytes} does not fit the size column")))
}

pub fn count_guarantees(db: &Database) -> Result<i64, LockerError> {
    db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM guarantees", [], |row| row.get(0))
            .map_err(|e| LockerError::DbError(format!("count guarantees failed: {e}")))
    })
}

/// Loads the demo guarantees into an empty locker. Returns how many were inserted.
pub fn seed_if_empty(db: &Database) -> Result<usize, LockerError> {
    if count_guarantees(db)? > 0 {
        debug!("guarantees already present, skipping seed");
        return Ok(0);
    }

    let samples = sample_guarantees()?;

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| LockerError::DbError(e.to_string()))?;
        for g in &samples {
            insert_guarantee(&tx, g)?;
        }
        tx.commit()
            .map_err(|e| LockerError::DbError(e.to_string()))?;
        Ok(())
    })?;

    info!(count = samples.len(), "seeded sample guarantees");
    Ok(samples.len())
}

struct GuaranteeRow {
    id: i64,
    product_name: String,
    brand: String,
    category: String,
    purchase_date: String,
    expiry_date: String,
    warranty_period: String,
    purchase_amount: i64,
    currency: String,
}

/// All guarantees ordered by id, with status derived for `now` and `soon_days`.
///
/// A stored date or category that does not parse fails the whole load with
/// `DataError` / `InvalidArgument` rather than being skipped.
pub fn load_guarantees(
    db: &Database,
    now: NaiveDateTime,
    soon_days: i64,
) -> Result<Vec<GuaranteeRecord>, LockerError> {
    let (rows, mut documents) = db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT id, product_name, brand, category, purchase_date, expiry_date,
                       warranty_period, purchase_amount, currency
                FROM guarantees
                ORDER BY id
                "#,
            )
            .map_err(|e| LockerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(GuaranteeRow {
                    id: row.get(0)?,
                    product_name: row.get(1)?,
                    brand: row.get(2)?,
                    category: row.get(3)?,
                    purchase_date: row.get(4)?,
                    expiry_date: row.get(5)?,
                    warranty_period: row.get(6)?,
                    purchase_amount: row.get(7)?,
                    currency: row.get(8)?,
                })
            })
            .map_err(|e| LockerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| LockerError::DbError(e.to_string()))?);
        }

        Ok((out, load_document_names(conn)?))
    })?;

    rows.into_iter()
        .map(|row| {
            let fields = RecordFields {
                id: row.id,
                product_name: row.product_name,
                brand: row.brand,
                category: row.category.parse::<Category>()?,
                purchase_date: parse_date(&row.purchase_date)?,
                expiry_date: parse_date(&row.expiry_date)?,
                warranty_period: row.warranty_period,
                purchase_amount: Money::new(
                    u64::try_from(row.purchase_amount).map_err(|_| {
                        LockerError::DataError(format!(
                            "guarantee {} has negative amount {}",
                            row.id, row.purchase_amount
                        ))
                    })?,
                    row.currency,
                ),
                documents: documents.remove(&row.id).unwrap_or_default(),
            };
            let status = derive_status(fields.expiry_date, now, soon_days);
            GuaranteeRecord::new(fields, status)
        })
        .collect()
}

fn load_document_names(conn: &Connection) -> Result<HashMap<i64, Vec<String>>, LockerError> {
    let mut stmt = conn
        .prepare("SELECT guarantee_id, file_name FROM guarantee_documents ORDER BY id")
        .map_err(|e| LockerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
        .map_err(|e| LockerError::DbError(e.to_string()))?;

    let mut out: HashMap<i64, Vec<String>> = HashMap::new();
    for r in rows {
        let (id, name) = r.map_err(|e| LockerError::DbError(e.to_string()))?;
        out.entry(id).or_default().push(name);
    }
    Ok(out)
}

impl DocumentSubmitter for Database {
    fn submit_document(&self, doc: &NewGuarantee) -> Result<i64, LockerError> {
        let now = Utc::now();
        let now_unix = now.timestamp();

        let id = self.with_conn(|conn| {
            let tx = conn
                .transaction()
                .map_err(|e| LockerError::DbError(e.to_string()))?;

            tx.execute(
                r#"
                INSERT INTO guarantees (
                    product_name, brand, category, purchase_date, expiry_date,
                    warranty_period, purchase_amount, currency, description, created_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                "#,
                params![
                    doc.product_name,
                    doc.brand,
                    doc.category.label(),
                    doc.purchase_date.format(DATE_FMT).to_string(),
                    doc.expiry_date.format(DATE_FMT).to_string(),
                    doc.warranty_period.label(),
                    stored_amount(&doc.purchase_amount)?,
                    doc.purchase_amount.currency,
                    doc.description,
                    now.naive_utc(),
                ],
            )
            .map_err(|e| LockerError::DbError(format!("insert guarantee failed: {e}")))?;

            let id = tx.last_insert_rowid();

            for f in &doc.files {
                let stored = generate_unique_file_name(&mut OsRng, &f.original_name, now_unix);
                tx.execute(
                    r#"
                    INSERT INTO guarantee_documents
                        (guarantee_id, file_name, original_name, content_type, size_bytes)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    "#,
                    params![id, stored, f.original_name, f.content_type, stored_size(f.size_bytes)?],
                )
                .map_err(|e| LockerError::DbError(format!("insert document failed: {e}")))?;
            }

            tx.commit()
                .map_err(|e| LockerError::DbError(e.to_string()))?;
            Ok(id)
        })?;

        info!(id, product = %doc.product_name, files = doc.files.len(), "guarantee submitted");
        Ok(id)
    }
}
