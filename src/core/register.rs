//! The day's attendance register: the in-memory table paired with its
//! day file.
//!
//! Every mutator updates the table first and then mirrors it to disk
//! (`append` for a fresh insert, `rewrite_all` otherwise). If the disk
//! write fails the table keeps the change and the storage error is
//! returned, so the caller can report it.

use crate::config::Config;
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::record::{AttendanceRecord, RecordInput, RecordPatch};
use crate::models::status::Status;
use crate::store::{AttendanceTable, AuditLog, DayFile};
use crate::ui::messages::warning;
use crate::utils::date::format_date;
use crate::utils::time;
use chrono::{NaiveDate, NaiveTime};

pub struct Register {
    file: DayFile,
    table: AttendanceTable,
    default_status: Status,
    audit: Option<AuditLog>,
    clock: fn() -> NaiveTime,
}

impl Register {
    /// Load the day file into a fresh table.
    pub fn open(file: DayFile) -> AppResult<Self> {
        let table = AttendanceTable::from(file.load_all()?);
        Ok(Self {
            file,
            table,
            default_status: Status::Present,
            audit: None,
            clock: time::now,
        })
    }

    /// Open the register for `date` using the configured data directory.
    pub fn from_config(cfg: &Config, date: NaiveDate) -> AppResult<Self> {
        let mut reg = Self::open(DayFile::for_config(cfg, date))?
            .with_default_status(cfg.default_status);
        if cfg.audit_log {
            reg = reg.with_audit(AuditLog::new(cfg.data_path()));
        }
        Ok(reg)
    }

    pub fn with_default_status(mut self, status: Status) -> Self {
        self.default_status = status;
        self
    }

    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Replace the wall clock used to stamp records.
    pub fn with_clock(mut self, clock: fn() -> NaiveTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn table(&self) -> &AttendanceTable {
        &self.table
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        self.table.rows()
    }

    pub fn day_file(&self) -> &DayFile {
        &self.file
    }

    pub fn date(&self) -> NaiveDate {
        self.file.date()
    }

    /// Validate the input, add it to the table and append it to the file.
    /// Returns the new row key.
    pub fn submit(&mut self, input: RecordInput) -> AppResult<usize> {
        let record = input.into_record(self.default_status, (self.clock)())?;
        let summary = format!("{}, {}", record.name, record.status);

        let row = self.table.insert(record.clone());
        self.file.append(&record)?;

        self.audit("add", &record.student_id, &summary);
        Ok(row)
    }

    /// Apply `patch` to `row`, reset its time to now, and rewrite the file.
    pub fn edit(&mut self, row: usize, patch: &RecordPatch) -> AppResult<&AttendanceRecord> {
        if patch.is_empty() {
            return Err(ValidationError::EmptyEdit.into());
        }

        let current = self.table.get(row).ok_or(AppError::InvalidRow(row))?;
        let record = patch
            .apply(current)
            .into_record(self.default_status, (self.clock)())?;
        let summary = format!("row {}: {}, {}", row, record.name, record.status);
        let target = record.student_id.clone();

        self.table.update(row, record)?;
        self.file.rewrite_all(self.table.rows())?;

        self.audit("edit", &target, &summary);
        self.table.get(row).ok_or(AppError::InvalidRow(row))
    }

    /// Delete the selected rows and rewrite the file. Returns how many
    /// rows were removed.
    pub fn delete(&mut self, rows: &[usize]) -> AppResult<usize> {
        if rows.is_empty() {
            return Err(AppError::NoSelection);
        }

        let removed = self.table.delete(rows)?;
        self.file.rewrite_all(self.table.rows())?;

        self.audit(
            "del",
            &format_date(self.date()),
            &format!("{} record(s) deleted", removed),
        );
        Ok(removed)
    }

    /// Read-only filter over the table; see `AttendanceTable::search`.
    pub fn search(&self, term: &str) -> Vec<(usize, &AttendanceRecord)> {
        self.table.search(term)
    }

    /// Rewrite the day file from the table. Returns the row count.
    pub fn export_day(&self) -> AppResult<usize> {
        if self.table.is_empty() {
            return Err(AppError::NoRecords(format_date(self.date())));
        }

        self.file.rewrite_all(self.table.rows())?;

        self.audit(
            "export",
            &self.file.path().to_string_lossy(),
            &format!("{} record(s) written", self.table.len()),
        );
        Ok(self.table.len())
    }

    /// Write an audit entry; a failure only warns.
    pub(crate) fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Some(log) = &self.audit
            && let Err(e) = log.record(operation, target, message)
        {
            warning(format!("Failed to write audit log: {}", e));
        }
    }
}
