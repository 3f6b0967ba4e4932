use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::register::Register;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, date: NaiveDate) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let register = Register::from_config(cfg, date)?;
        BackupLogic::backup(&register, file, *compress)?;
    }

    Ok(())
}
