use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::AuditLog;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory that holds one CSV file per day
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rattendance…");

    let data = cfg.init_all(cli.test)?;

    if cfg.audit_log
        && let Err(e) = AuditLog::new(&data).record(
            "init",
            "",
            &format!("Data directory initialized at {}", data.display()),
        )
    {
        warning(format!("Failed to write audit log: {}", e));
    }

    println!("🎉 rattendance initialization completed!");
    Ok(())
}
