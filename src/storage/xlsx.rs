// src/storage/xlsx.rs

//! Spreadsheet rendering: one header row, one row per record.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{AppError, Result};
use crate::models::FlatRecord;

const SHEET_NAME: &str = "Fighters";

/// Union of every record's keys, in first-seen order.
///
/// Records built by the assembler share one key order, but a failed section
/// extraction can contribute keys that a successful one does not.
pub fn export_columns(records: &[FlatRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.to_string());
            }
        }
    }
    columns
}

/// Render records into an in-memory `.xlsx` workbook.
///
/// Missing cells are left blank.
pub fn render_workbook(records: &[FlatRecord]) -> Result<Vec<u8>> {
    let columns = export_columns(records);
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, key) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, column_index(col)?, key, &header_format)?;
    }

    for (row, record) in records.iter().enumerate() {
        let row = u32::try_from(row + 1)
            .map_err(|_| AppError::validation("too many records for one worksheet"))?;
        for (col, key) in columns.iter().enumerate() {
            if let Some(value) = record.get(key) {
                worksheet.write_string(row, column_index(col)?, value)?;
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

fn column_index(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| AppError::validation("too many columns for one worksheet"))
}
