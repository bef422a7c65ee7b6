use crate::domain::guarantee::GuaranteeRecord;
use crate::errors::LockerError;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 10] = [
    "ID",
    "Product",
    "Brand",
    "Category",
    "Purchase Date",
    "Expiry Date",
    "Warranty Period",
    "Amount",
    "Currency",
    "Status",
];

/// Writes a computed view, in view order, to an in-memory XLSX workbook.
pub fn export_guarantees_xlsx(rows: &[&GuaranteeRecord]) -> Result<Vec<u8>, LockerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                LockerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, g) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, g.id as f64)
            .map_err(|e| LockerError::XlsxError(format!("Failed to write id: {}", e)))?;

        worksheet
            .write_string(r, 1, &g.product_name)
            .map_err(|e| LockerError::XlsxError(format!("Failed to write product: {}", e)))?;

        worksheet
            .write_string(r, 2, &g.brand)
            .map_err(|e| LockerError::XlsxError(format!("Failed to write brand: {}", e)))?;

        worksheet
            .write_string(r, 3, g.category.label())
            .map_err(|e| LockerError::XlsxError(format!("Failed to write category: {}", e)))?;

        worksheet
            .write_string(r, 4, g.purchase_date.format("%Y-%m-%d").to_string())
            .map_err(|e| LockerError::XlsxError(format!("Failed to write purchase date: {}", e)))?;

        worksheet
            .write_string(r, 5, g.expiry_date.format("%Y-%m-%d").to_string())
            .map_err(|e| LockerError::XlsxError(format!("Failed to write expiry date: {}", e)))?;

        worksheet
            .write_string(r, 6, &g.warranty_period)
            .map_err(|e| LockerError::XlsxError(format!("Failed to write period: {}", e)))?;

        worksheet
            .write_number(r, 7, g.purchase_amount.amount as f64)
            .map_err(|e| LockerError::XlsxError(format!("Failed to write amount: {}", e)))?;

        worksheet
            .write_string(r, 8, &g.purchase_amount.currency)
            .map_err(|e| LockerError::XlsxError(format!("Failed to write currency: {}", e)))?;

        worksheet
            .write_string(r, 9, g.status.label())
            .map_err(|e| LockerError::XlsxError(format!("Failed to write status: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| LockerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
