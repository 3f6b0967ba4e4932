//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected user input. Nothing has been mutated when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Student ID is required")]
    MissingId,

    #[error("Student name is required")]
    MissingName,

    #[error("Nothing to change: pass at least one of --id, --name, --dept, --status")]
    EmptyEdit,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Cannot access attendance file {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Input error: {0}")]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid status: {0} (use Present, Absent or Late)")]
    InvalidStatus(String),

    #[error("Invalid row list: {0}")]
    InvalidRowList(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid row number: {0}")]
    InvalidRow(usize),

    #[error("No rows selected")]
    NoSelection,

    #[error("No attendance records for {0}")]
    NoRecords(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Wrap an I/O failure on the given day file.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Storage {
            path: path.into(),
            source,
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
