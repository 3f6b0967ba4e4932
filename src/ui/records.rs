//! Terminal rendering of attendance rows.

use crate::models::record::{AttendanceRecord, HEADERS};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::table::{Column, Table};

/// Render keyed rows as a table with a leading `#` column.
pub fn records_table<'a>(rows: impl IntoIterator<Item = (usize, &'a AttendanceRecord)>) -> String {
    let mut columns = vec![Column::new("#")];
    columns.extend(HEADERS.iter().map(|h| Column::new(h)));

    let mut table = Table::new(columns);
    for (key, rec) in rows {
        table.add_row(vec![
            key.to_string(),
            rec.student_id.clone(),
            rec.name.clone(),
            colorize_optional(&rec.department),
            match rec.status.parsed() {
                Some(status) => colorize_status(status),
                None => rec.status_str(),
            },
            rec.time_str(),
        ]);
    }

    table.render()
}
