//! Per-day CSV file: the durable mirror of one day's attendance table.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceRecord, HEADERS};
use crate::utils::date::format_date;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Handle on `<dir>/<prefix><YYYY-MM-DD>.csv`.
///
/// Every operation is a single synchronous pass over the file. There is
/// no locking: a second writer on the same day can corrupt it.
#[derive(Debug, Clone)]
pub struct DayFile {
    path: PathBuf,
    date: NaiveDate,
}

impl DayFile {
    pub fn new(dir: impl AsRef<Path>, prefix: &str, date: NaiveDate) -> Self {
        let name = format!("{}{}.csv", prefix, format_date(date));
        Self {
            path: dir.as_ref().join(name),
            date,
        }
    }

    pub fn for_config(cfg: &Config, date: NaiveDate) -> Self {
        Self::new(cfg.data_path(), &cfg.file_prefix, date)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one row. The header is written first when the file is new
    /// (or empty). Duplicates are not checked.
    pub fn append(&self, record: &AttendanceRecord) -> AppResult<()> {
        self.ensure_parent()?;

        let needs_header = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.storage(e))?;

        let mut wtr = Writer::from_writer(file);
        if needs_header {
            wtr.write_record(HEADERS).map_err(|e| self.storage(e.into()))?;
        }
        wtr.write_record(record.to_row())
            .map_err(|e| self.storage(e.into()))?;
        wtr.flush().map_err(|e| self.storage(e))?;

        Ok(())
    }

    /// Truncate the file and write header plus every record, in order.
    /// A failure mid-write can leave a truncated file.
    pub fn rewrite_all(&self, records: &[AttendanceRecord]) -> AppResult<()> {
        self.ensure_parent()?;

        let file = File::create(&self.path).map_err(|e| self.storage(e))?;
        let mut wtr = Writer::from_writer(file);

        wtr.write_record(HEADERS).map_err(|e| self.storage(e.into()))?;
        for rec in records {
            wtr.write_record(rec.to_row())
                .map_err(|e| self.storage(e.into()))?;
        }
        wtr.flush().map_err(|e| self.storage(e))?;

        Ok(())
    }

    /// Read every five-field row after the header.
    /// Rows with any other field count are dropped silently. A missing
    /// file yields an empty list.
    pub fn load_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.storage(e.into()))?;

        let mut records = Vec::new();
        for row in rdr.byte_records() {
            match row {
                Ok(row) => {
                    let row = StringRecord::from_byte_record_lossy(row);
                    if let Some(rec) = AttendanceRecord::from_row(&row) {
                        records.push(rec);
                    }
                }
                Err(e) if e.is_io_error() => return Err(self.storage(e.into())),
                Err(_) => continue,
            }
        }

        Ok(records)
    }

    fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.storage(e))?;
        }
        Ok(())
    }

    fn storage(&self, e: io::Error) -> AppError {
        AppError::storage(&self.path, e)
    }
}
