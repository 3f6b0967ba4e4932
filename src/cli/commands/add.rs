use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::Register;
use crate::errors::AppResult;
use crate::models::record::RecordInput;
use crate::models::status::Status;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Record attendance for one student.
pub fn handle(cmd: &Commands, cfg: &Config, date: NaiveDate) -> AppResult<()> {
    if let Commands::Add {
        student_id,
        name,
        dept,
        status,
    } = cmd
    {
        //
        // 1. Parse status (optional, default from config)
        //
        let status = status
            .as_deref()
            .map(str::parse::<Status>)
            .transpose()?;

        //
        // 2. Build raw input; validation happens inside submit
        //
        let input = RecordInput::new(
            student_id.as_str(),
            name.as_str(),
            dept.clone().unwrap_or_default(),
            status,
        );

        //
        // 3. Insert + append
        //
        let mut register = Register::from_config(cfg, date)?;
        let row = register.submit(input)?;

        if let Some(rec) = register.table().get(row) {
            success(format!(
                "Attendance recorded for {} ({}) as {} at {}",
                rec.name,
                rec.student_id,
                rec.status,
                rec.time_str()
            ));
        }
    }

    Ok(())
}
