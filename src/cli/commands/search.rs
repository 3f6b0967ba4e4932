use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::Register;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::records::records_table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, date: NaiveDate) -> AppResult<()> {
    if let Commands::Search { term } = cmd {
        let register = Register::from_config(cfg, date)?;

        if register.table().is_empty() {
            info(format!("No attendance records found for {}.", date));
            return Ok(());
        }

        let hits = register.search(term);
        if hits.is_empty() {
            info("No matches found.");
            return Ok(());
        }

        let count = hits.len();
        header(format!("Search '{}' in {}", term.trim(), date));
        print!("{}", records_table(hits));
        println!("\n{} of {} record(s) match", count, register.table().len());
    }
    Ok(())
}
