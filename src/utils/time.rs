//! Time utilities: wall-clock stamps and HH:MM:SS parsing/formatting.

use chrono::{Local, NaiveTime, Timelike};

/// Current local time, truncated to whole seconds.
pub fn now() -> NaiveTime {
    let t = Local::now().time();
    t.with_nanosecond(0).unwrap_or(t)
}

/// Parse `HH:MM:SS`, falling back to `HH:MM`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_seconds() {
        assert_eq!(parse_time("09:15:30"), NaiveTime::from_hms_opt(9, 15, 30));
        assert_eq!(parse_time("09:15"), NaiveTime::from_hms_opt(9, 15, 0));
        assert_eq!(parse_time("nine"), None);
    }

    #[test]
    fn now_has_no_fractional_seconds() {
        assert_eq!(now().nanosecond(), 0);
        assert_eq!(format_time(now()).len(), 8);
    }
}
