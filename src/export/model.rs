// src/export/model.rs

use crate::models::record::{AttendanceRecord, HEADERS};
use serde::Serialize;

/// Flat row used by CSV/JSON/XLSX exports, one per record.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    #[serde(rename = "Student ID")]
    pub student_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Time")]
    pub time: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            student_id: r.student_id.clone(),
            name: r.name.clone(),
            department: r.department.clone(),
            status: r.status_str(),
            time: r.time_str(),
        }
    }
}

/// JSON document: the day plus its rows.
#[derive(Serialize, Debug)]
pub struct DayExport<'a> {
    pub date: String,
    pub records: &'a [RecordExport],
}

pub(crate) fn get_headers() -> [&'static str; 5] {
    HEADERS
}

pub(crate) fn to_exports(records: &[AttendanceRecord]) -> Vec<RecordExport> {
    records.iter().map(RecordExport::from).collect()
}
