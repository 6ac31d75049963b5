// src/export/logic.rs

use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the recorded days.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of the `--range` forms
    ///
    /// Returns the number of exported rows.
    pub fn export(
        ledger: &Ledger,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let rows = Self::collect_rows(ledger, range)?;

        if rows.is_empty() {
            warning("No records found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }

    /// Rows for the given range, in date order.
    pub fn collect_rows(ledger: &Ledger, range: &Option<String>) -> AppResult<Vec<RecordExport>> {
        let rows = match range {
            None => ledger
                .iter()
                .map(|(k, r)| RecordExport::from_entry(k, r))
                .collect(),
            Some(r) if r.eq_ignore_ascii_case("all") => ledger
                .iter()
                .map(|(k, r)| RecordExport::from_entry(k, r))
                .collect(),
            Some(r) => {
                let (start, end) = parse_range(r)?;
                ledger
                    .entries_between(start..=end)
                    .map(|(k, r)| RecordExport::from_entry(k, r))
                    .collect()
            }
        };
        Ok(rows)
    }
}
