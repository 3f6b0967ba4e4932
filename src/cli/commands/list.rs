use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::Register;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::records::records_table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, date: NaiveDate) -> AppResult<()> {
    if let Commands::List = cmd {
        let register = Register::from_config(cfg, date)?;

        if register.table().is_empty() {
            info(format!("No attendance records found for {}.", date));
            return Ok(());
        }

        header(format!("Attendance for {}", date));
        print!("{}", records_table(register.table().iter_keyed()));
        println!("\n{} record(s)", register.table().len());
    }
    Ok(())
}
