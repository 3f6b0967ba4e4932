use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::Register;
use crate::errors::AppResult;
use crate::models::record::RecordPatch;
use crate::models::status::Status;
use crate::ui::messages::success;
use crate::ui::records::records_table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, date: NaiveDate) -> AppResult<()> {
    if let Commands::Edit {
        row,
        student_id,
        name,
        dept,
        status,
    } = cmd
    {
        let patch = RecordPatch {
            student_id: student_id.clone(),
            name: name.clone(),
            department: dept.clone(),
            status: status.as_deref().map(str::parse::<Status>).transpose()?,
        };

        let mut register = Register::from_config(cfg, date)?;
        let updated = register.edit(*row, &patch)?;

        success("Record updated successfully!");
        print!("{}", records_table([(*row, updated)]));
    }
    Ok(())
}
