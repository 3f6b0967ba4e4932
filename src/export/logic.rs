// src/export/logic.rs

use crate::core::register::Register;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_exports;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::success;
use crate::utils::date::format_date;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the day's table.
    ///
    /// - no `file`: rewrite the day file from the table (CSV only)
    /// - `file`: write the table there in `format`, asking before
    ///   overwriting unless `force`
    ///
    /// Returns the number of exported records.
    pub fn export(
        register: &Register,
        format: &ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let date = format_date(register.date());

        if register.table().is_empty() {
            return Err(AppError::NoRecords(date));
        }

        let Some(file) = file else {
            if !matches!(format, ExportFormat::Csv) {
                return Err(AppError::InvalidExportFormat(format!(
                    "{} requires --file (the day file is always CSV)",
                    format.as_str()
                )));
            }

            let count = register.export_day()?;
            success(format!(
                "Attendance records successfully exported to: {}",
                register.day_file().path().display()
            ));
            return Ok(count);
        };

        let path = Path::new(file);
        if path == register.day_file().path() {
            return Self::export(register, format, None, force);
        }

        ensure_writable(path, force)?;

        let rows = to_exports(register.records());
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&date, &rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&date, &rows, path)?,
        }

        register.audit(
            "export",
            &path.to_string_lossy(),
            &format!("{} record(s) as {}", rows.len(), format.as_str()),
        );
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::RecordInput;
    use crate::store::DayFile;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;

    fn setup(name: &str) -> (PathBuf, Register) {
        let dir = std::env::temp_dir().join(format!("rattendance_export_{}", name));
        fs::remove_dir_all(&dir).ok();
        let file = DayFile::new(&dir, "attendance_", NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        (dir, Register::open(file).unwrap())
    }

    #[test]
    fn empty_table_is_not_exported() {
        let (dir, reg) = setup("empty");
        let out = dir.join("out.csv");
        let err = ExportLogic::export(&reg, &ExportFormat::Csv, out.to_str(), true).unwrap_err();
        assert!(matches!(err, AppError::NoRecords(d) if d == "2025-09-01"));
        assert!(!out.exists());
    }

    #[test]
    fn csv_copy_uses_day_file_layout() {
        let (dir, mut reg) = setup("csv");
        reg.submit(RecordInput::new("S1", "Alice", "CS", None)).unwrap();
        reg.submit(RecordInput::new("S2", "Bob", "", None)).unwrap();

        let out = dir.join("copy").join("out.csv");
        let n = ExportLogic::export(&reg, &ExportFormat::Csv, out.to_str(), true).unwrap();
        assert_eq!(n, 2);

        let copy = DayFile::new(dir.join("copy"), "", reg.date());
        fs::rename(&out, copy.path()).unwrap();
        assert_eq!(copy.load_all().unwrap(), reg.records());
    }

    #[test]
    fn json_export_contains_date_and_rows() {
        let (dir, mut reg) = setup("json");
        reg.submit(RecordInput::new("S1", "Alice", "CS", None)).unwrap();

        let out = dir.join("out.json");
        ExportLogic::export(&reg, &ExportFormat::Json, out.to_str(), true).unwrap();

        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["date"], "2025-09-01");
        assert_eq!(v["records"][0]["Student ID"], "S1");
        assert_eq!(v["records"][0]["Status"], "Present");
    }

    #[test]
    fn xlsx_export_writes_a_workbook() {
        let (dir, mut reg) = setup("xlsx");
        reg.submit(RecordInput::new("007", "Bond", "MI6", None)).unwrap();

        let out = dir.join("out.xlsx");
        ExportLogic::export(&reg, &ExportFormat::Xlsx, out.to_str(), true).unwrap();

        let bytes = fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn day_file_export_requires_csv() {
        let (_dir, mut reg) = setup("dayfile");
        reg.submit(RecordInput::new("S1", "Alice", "CS", None)).unwrap();

        assert!(matches!(
            ExportLogic::export(&reg, &ExportFormat::Json, None, false),
            Err(AppError::InvalidExportFormat(_))
        ));
        assert_eq!(ExportLogic::export(&reg, &ExportFormat::Csv, None, false).unwrap(), 1);
    }
}
