//! Ordered in-memory attendance table, keyed by 1-based row number.

use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceTable {
    rows: Vec<AttendanceRecord>,
}

impl From<Vec<AttendanceRecord>> for AttendanceTable {
    fn from(rows: Vec<AttendanceRecord>) -> Self {
        Self { rows }
    }
}

impl AttendanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[AttendanceRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&AttendanceRecord> {
        row.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// Rows with their keys, in display order.
    pub fn iter_keyed(&self) -> impl Iterator<Item = (usize, &AttendanceRecord)> {
        self.rows.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    /// Append a record and return its row key.
    pub fn insert(&mut self, record: AttendanceRecord) -> usize {
        self.rows.push(record);
        self.rows.len()
    }

    pub fn update(&mut self, row: usize, record: AttendanceRecord) -> AppResult<()> {
        let idx = self.index_of(row)?;
        self.rows[idx] = record;
        Ok(())
    }

    /// Remove every listed row. Either all keys are valid and removed,
    /// or nothing changes. Repeated keys count once.
    pub fn delete(&mut self, rows: &[usize]) -> AppResult<usize> {
        let mut idx = rows
            .iter()
            .map(|&r| self.index_of(r))
            .collect::<AppResult<Vec<usize>>>()?;
        idx.sort_unstable();
        idx.dedup();

        for &i in idx.iter().rev() {
            self.rows.remove(i);
        }

        Ok(idx.len())
    }

    /// Case-insensitive substring search on id, name, department, status.
    /// Only the empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<(usize, &AttendanceRecord)> {
        let needle = term.to_lowercase();
        self.iter_keyed()
            .filter(|(_, r)| needle.is_empty() || r.matches(&needle))
            .collect()
    }

    fn index_of(&self, row: usize) -> AppResult<usize> {
        if row == 0 || row > self.rows.len() {
            return Err(AppError::InvalidRow(row));
        }
        Ok(row - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::Status;
    use chrono::NaiveTime;

    fn rec(id: &str, name: &str, dept: &str, status: Status) -> AttendanceRecord {
        AttendanceRecord::new(id, name, dept, status, NaiveTime::from_hms_opt(9, 0, 0).unwrap())
    }

    fn sample() -> AttendanceTable {
        AttendanceTable::from(vec![
            rec("S1", "Alice", "CS", Status::Present),
            rec("S2", "Bob", "Math", Status::Absent),
            rec("S3", "Carla", "Physics", Status::Late),
            rec("S4", "Dan", "CS", Status::Present),
        ])
    }

    #[test]
    fn insert_returns_row_keys() {
        let mut t = AttendanceTable::new();
        assert_eq!(t.insert(rec("S1", "Alice", "", Status::Present)), 1);
        assert_eq!(t.insert(rec("S1", "Alice", "", Status::Present)), 2);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(2).unwrap().student_id, "S1");
        assert!(t.get(0).is_none());
        assert!(t.get(3).is_none());
    }

    #[test]
    fn update_out_of_range_fails() {
        let mut t = sample();
        t.update(2, rec("S2", "Bob", "Math", Status::Late)).unwrap();
        assert_eq!(t.get(2).unwrap().status, Status::Late);
        assert!(matches!(
            t.update(9, rec("X", "X", "", Status::Late)),
            Err(AppError::InvalidRow(9))
        ));
    }

    #[test]
    fn delete_removes_selected_rows() {
        let mut t = sample();
        assert_eq!(t.delete(&[3, 1, 3]).unwrap(), 2);
        let ids: Vec<&str> = t.rows().iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(ids, vec!["S2", "S4"]);
    }

    #[test]
    fn delete_with_bad_key_changes_nothing() {
        let mut t = sample();
        assert!(matches!(t.delete(&[1, 7]), Err(AppError::InvalidRow(7))));
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn search_matches_single_record_or_nothing() {
        let t = sample();

        let hits = t.search("carl");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 3);

        assert_eq!(t.search("PHYS").len(), 1);
        // "Physics" contains "cs" too
        let keys: Vec<usize> = t.search("cs").into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![1, 3, 4]);
        assert_eq!(t.search("absent")[0].1.name, "Bob");
        assert!(t.search("zzz").is_empty());
    }

    #[test]
    fn only_the_empty_term_matches_everything() {
        let t = sample();
        assert_eq!(t.search("").len(), 4);
        assert!(t.search("  ").is_empty());
        assert!(t.search(" bob").is_empty());
    }
}
