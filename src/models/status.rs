use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Present, // P
    Absent, // A
    Late,   // L
}

impl Status {
    /// Label written to the day file and shown in tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
            Status::Late => "Late",
        }
    }

    /// Helper: convert input from CLI or file, case-insensitive.
    /// Accepts full names and the one-letter codes P/A/L.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "present" | "p" => Some(Status::Present),
            "absent" | "a" => Some(Status::Absent),
            "late" | "l" => Some(Status::Late),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}
