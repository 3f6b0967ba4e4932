//! ANSI color helper utilities for terminal output.

use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Present → green, Late → yellow, Absent → red.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Present => GREEN,
        Status::Late => YELLOW,
        Status::Absent => RED,
    }
}

pub fn colorize_status(status: Status) -> String {
    format!("{}{}{}", color_for_status(status), status, RESET)
}

/// Grey placeholder for empty optional fields (e.g. department).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
