//! Flat-file storage: day files, the in-memory table, and the audit log.

pub mod audit;
pub mod day_file;
pub mod table;

pub use audit::AuditLog;
pub use day_file::DayFile;
pub use table::AttendanceTable;
