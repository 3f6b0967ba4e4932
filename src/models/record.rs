use super::status::Status;
use crate::errors::ValidationError;
use crate::utils::time::{format_time, parse_time};
use chrono::NaiveTime;
use csv::StringRecord;
use serde::Serialize;
use std::fmt;

/// Column headers of a day file, in order.
pub const HEADERS: [&str; 5] = ["Student ID", "Name", "Department", "Status", "Time"];

/// Number of fields in a well-formed row.
pub const FIELD_COUNT: usize = HEADERS.len();

/// A status or time cell. Values read from a day file that do not parse
/// are kept verbatim and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Field<T> {
    Parsed(T),
    Raw(String),
}

impl<T: Copy> Field<T> {
    pub fn parsed(&self) -> Option<T> {
        match self {
            Field::Parsed(v) => Some(*v),
            Field::Raw(_) => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Parsed(value)
    }
}

impl<T: PartialEq> PartialEq<T> for Field<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(self, Field::Parsed(v) if v == other)
    }
}

impl fmt::Display for Field<Status> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Parsed(s) => f.write_str(s.as_str()),
            Field::Raw(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Field<NaiveTime> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Parsed(t) => f.write_str(&format_time(*t)),
            Field::Raw(s) => f.write_str(s),
        }
    }
}

/// One attendance entry for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub student_id: String,      // ⇔ "Student ID"
    pub name: String,            // ⇔ "Name"
    pub department: String,      // ⇔ "Department" (may be empty)
    pub status: Field<Status>,   // ⇔ "Status" ('Present' | 'Absent' | 'Late')
    pub time: Field<NaiveTime>,  // ⇔ "Time" (HH:MM:SS)
}

impl AttendanceRecord {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        status: Status,
        time: NaiveTime,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            department: department.into(),
            status: status.into(),
            time: time.into(),
        }
    }

    pub fn status_str(&self) -> String {
        self.status.to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.to_string()
    }

    /// Fields in file order.
    pub fn to_row(&self) -> [String; FIELD_COUNT] {
        [
            self.student_id.clone(),
            self.name.clone(),
            self.department.clone(),
            self.status_str(),
            self.time_str(),
        ]
    }

    /// Parse a row read from a day file.
    /// Returns `None` only for rows without exactly five fields.
    pub fn from_row(row: &StringRecord) -> Option<Self> {
        if row.len() != FIELD_COUNT {
            return None;
        }

        let status = Status::from_code(&row[3])
            .map_or_else(|| Field::Raw(row[3].to_string()), Field::Parsed);
        let time = parse_time(&row[4])
            .map_or_else(|| Field::Raw(row[4].to_string()), Field::Parsed);

        Some(Self {
            student_id: row[0].to_string(),
            name: row[1].to_string(),
            department: row[2].to_string(),
            status,
            time,
        })
    }

    /// Case-insensitive substring match on id, name, department and status.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [
            self.student_id.as_str(),
            self.name.as_str(),
            self.department.as_str(),
            self.status_str().as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Raw form input, before validation.
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    pub student_id: String,
    pub name: String,
    pub department: String,
    pub status: Option<Field<Status>>,
}

impl RecordInput {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        status: Option<Status>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            department: department.into(),
            status: status.map(Field::Parsed),
        }
    }

    /// Trim every text field and check that id and name are present.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let student_id = self.student_id.trim().to_string();
        let name = self.name.trim().to_string();
        let department = self.department.trim().to_string();

        if student_id.is_empty() {
            return Err(ValidationError::MissingId);
        }
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        Ok(Self {
            student_id,
            name,
            department,
            status: self.status,
        })
    }

    /// Validate and stamp the input with `time`.
    pub fn into_record(
        self,
        default_status: Status,
        time: NaiveTime,
    ) -> Result<AttendanceRecord, ValidationError> {
        let input = self.validate()?;
        Ok(AttendanceRecord {
            student_id: input.student_id,
            name: input.name,
            department: input.department,
            status: input.status.unwrap_or(Field::Parsed(default_status)),
            time: Field::Parsed(time),
        })
    }
}

/// Field changes requested by `edit`. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub student_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub status: Option<Status>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.student_id.is_none()
            && self.name.is_none()
            && self.department.is_none()
            && self.status.is_none()
    }

    /// Merge the patch over `current`, producing input to re-validate.
    pub fn apply(&self, current: &AttendanceRecord) -> RecordInput {
        RecordInput {
            student_id: self
                .student_id
                .clone()
                .unwrap_or_else(|| current.student_id.clone()),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            department: self
                .department
                .clone()
                .unwrap_or_else(|| current.department.clone()),
            status: Some(
                self.status
                    .map_or_else(|| current.status.clone(), Field::Parsed),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn validate_trims_and_requires_id_and_name() {
        let ok = RecordInput::new("  S1 ", " Alice ", " CS ", None)
            .validate()
            .unwrap();
        assert_eq!(ok.student_id, "S1");
        assert_eq!(ok.name, "Alice");
        assert_eq!(ok.department, "CS");

        let err = RecordInput::new("   ", "Alice", "", None).validate();
        assert_eq!(err.unwrap_err(), ValidationError::MissingId);

        let err = RecordInput::new("S1", "", "", None).validate();
        assert_eq!(err.unwrap_err(), ValidationError::MissingName);
    }

    #[test]
    fn into_record_uses_default_status_when_missing() {
        let rec = RecordInput::new("S1", "Alice", "", None)
            .into_record(Status::Present, t(9, 0, 0))
            .unwrap();
        assert_eq!(rec.status, Status::Present);
        assert_eq!(rec.department, "");

        let rec = RecordInput::new("S1", "Alice", "", Some(Status::Late))
            .into_record(Status::Present, t(9, 0, 0))
            .unwrap();
        assert_eq!(rec.status, Status::Late);
    }

    #[test]
    fn from_row_requires_five_fields() {
        let good = StringRecord::from(vec!["S1", "Alice", "CS", "Present", "09:15:00"]);
        let rec = AttendanceRecord::from_row(&good).unwrap();
        assert_eq!(rec.time, t(9, 15, 0));
        assert_eq!(rec.to_row()[4], "09:15:00");

        let short = StringRecord::from(vec!["S1", "Alice", "Present", "09:15:00"]);
        assert!(AttendanceRecord::from_row(&short).is_none());

        let long = StringRecord::from(vec!["S1", "Alice", "CS", "Present", "09:15:00", "x"]);
        assert!(AttendanceRecord::from_row(&long).is_none());
    }

    #[test]
    fn from_row_keeps_unreadable_status_and_time_verbatim() {
        let row = StringRecord::from(vec!["S2", "Bob", "Math", "Excused", "9am"]);
        let rec = AttendanceRecord::from_row(&row).unwrap();
        assert!(matches!(&rec.status, Field::Raw(s) if s == "Excused"));
        assert!(matches!(&rec.time, Field::Raw(s) if s == "9am"));
        assert_eq!(rec.to_row(), ["S2", "Bob", "Math", "Excused", "9am"]);
        assert!(rec.matches("excused"));

        // an edit that leaves the status alone keeps the raw text
        let merged = RecordPatch {
            name: Some("Robert".into()),
            ..Default::default()
        }
        .apply(&rec);
        let edited = merged.into_record(Status::Present, t(10, 0, 0)).unwrap();
        assert_eq!(edited.status_str(), "Excused");
        assert_eq!(edited.time, t(10, 0, 0));
    }

    #[test]
    fn matches_is_case_insensitive_and_skips_time() {
        let rec = AttendanceRecord::new("S1", "Alice", "Physics", Status::Late, t(9, 15, 0));
        assert!(rec.matches("ali"));
        assert!(rec.matches("phys"));
        assert!(rec.matches("late"));
        assert!(rec.matches("s1"));
        assert!(!rec.matches("09:15"));
    }

    #[test]
    fn patch_keeps_untouched_fields() {
        let rec = AttendanceRecord::new("S1", "Alice", "CS", Status::Present, t(9, 0, 0));
        let patch = RecordPatch {
            status: Some(Status::Late),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        let merged = patch.apply(&rec);
        assert_eq!(merged.student_id, "S1");
        assert_eq!(merged.name, "Alice");
        assert_eq!(merged.department, "CS");
        assert_eq!(merged.status, Some(Field::Parsed(Status::Late)));
        assert!(RecordPatch::default().is_empty());
    }
}
