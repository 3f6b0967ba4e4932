use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::Register;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, date: NaiveDate) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let register = Register::from_config(cfg, date)?;
        ExportLogic::export(&register, format, file.as_deref(), *force)?;
    }
    Ok(())
}
