use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::Register;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::ui::records::records_table;
use chrono::NaiveDate;

/// Parse a row selection such as `2`, `1,3` or `1,4-6`.
/// Keys above `max_row` are rejected before a range is expanded.
pub fn parse_rows(s: &str, max_row: usize) -> AppResult<Vec<usize>> {
    let invalid = || AppError::InvalidRowList(s.to_string());
    let in_range = |r: usize| {
        if r == 0 || r > max_row {
            Err(AppError::InvalidRow(r))
        } else {
            Ok(r)
        }
    };
    let mut rows = Vec::new();

    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((a, b)) => {
                let a: usize = a.trim().parse().map_err(|_| invalid())?;
                let b: usize = b.trim().parse().map_err(|_| invalid())?;
                if a > b {
                    return Err(invalid());
                }
                rows.extend(in_range(a)?..=in_range(b)?);
            }
            None => rows.push(in_range(part.parse().map_err(|_| invalid())?)?),
        }
    }

    if rows.is_empty() {
        return Err(AppError::NoSelection);
    }
    Ok(rows)
}

pub fn handle(cmd: &Commands, cfg: &Config, date: NaiveDate) -> AppResult<()> {
    if let Commands::Del { rows, yes } = cmd {
        let mut register = Register::from_config(cfg, date)?;
        let selected = parse_rows(rows, register.table().len())?;

        // every key must exist before asking
        let mut preview = Vec::new();
        for &r in &selected {
            let rec = register.table().get(r).ok_or(AppError::InvalidRow(r))?;
            if !preview.iter().any(|(k, _)| *k == r) {
                preview.push((r, rec));
            }
        }
        let count = preview.len();

        if cfg.confirm_delete && !*yes {
            print!("{}", records_table(preview));
            if !confirm(&format!("Delete {} selected record(s)?", count)) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = register.delete(&selected)?;
        success(format!("Deleted {} record(s)", removed));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lists_and_ranges() {
        assert_eq!(parse_rows("2", 9).unwrap(), vec![2]);
        assert_eq!(parse_rows("1, 3,5-7", 9).unwrap(), vec![1, 3, 5, 6, 7]);
        assert!(matches!(parse_rows("x", 9), Err(AppError::InvalidRowList(_))));
        assert!(matches!(parse_rows("4-2", 9), Err(AppError::InvalidRowList(_))));
        assert!(matches!(parse_rows(" , ", 9), Err(AppError::NoSelection)));
    }

    #[test]
    fn out_of_range_keys_fail_before_expanding() {
        assert!(matches!(
            parse_rows("1-18446744073709551615", 3),
            Err(AppError::InvalidRow(r)) if r == usize::MAX
        ));
        assert!(matches!(
            parse_rows("2-4000000000", 3),
            Err(AppError::InvalidRow(4000000000))
        ));
        assert!(matches!(parse_rows("4", 3), Err(AppError::InvalidRow(4))));
        assert!(matches!(parse_rows("0-2", 3), Err(AppError::InvalidRow(0))));
        assert!(matches!(parse_rows("1", 0), Err(AppError::InvalidRow(1))));
    }
}
