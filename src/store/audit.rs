//! Internal audit log: one CSV row per mutating operation.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const AUDIT_FILE: &str = "audit_log.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub date: String, // RFC 3339, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(AUDIT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry stamped with the current local time.
    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let is_new = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);

        wtr.serialize(AuditEntry {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        })?;
        wtr.flush()?;

        Ok(())
    }

    /// All entries, oldest first. Missing log → empty.
    pub fn entries(&self) -> AppResult<Vec<AuditEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut out = Vec::new();
        for entry in rdr.deserialize() {
            out.push(entry?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn records_are_appended_in_order() {
        let dir = env::temp_dir().join("rattendance_audit_test");
        fs::remove_dir_all(&dir).ok();
        let log = AuditLog::new(&dir);

        assert!(log.entries().unwrap().is_empty());

        log.record("add", "S1", "Alice, Present").unwrap();
        log.record("del", "2025-09-01", "1 record(s)").unwrap();

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "add");
        assert_eq!(entries[0].message, "Alice, Present");
        assert_eq!(entries[1].target, "2025-09-01");

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.starts_with("date,operation,target,message\n"));
    }
}
