//! Configuration file checks: report keys that are missing or unknown,
//! and rewrite the file with defaults filled in.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys understood by the current `Config`.
pub const KNOWN_KEYS: [&str; 5] = [
    "data_dir",
    "file_prefix",
    "default_status",
    "confirm_delete",
    "audit_log",
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

/// Compare the keys of a YAML document against `KNOWN_KEYS`.
pub fn check_yaml(content: &str) -> AppResult<ConfigReport> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

    let present: Vec<String> = map
        .keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect();

    let missing = KNOWN_KEYS
        .iter()
        .filter(|k| !present.iter().any(|p| p == *k))
        .map(|k| k.to_string())
        .collect();

    let unknown = present
        .into_iter()
        .filter(|p| !KNOWN_KEYS.contains(&p.as_str()))
        .collect();

    Ok(ConfigReport { missing, unknown })
}

/// Fill in missing keys with defaults and rewrite the file.
/// Returns `Ok(true)` when the file changed.
pub fn migrate_file(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        info(format!("No configuration file at {}", path.display()));
        return Ok(false);
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let report = check_yaml(&content)?;

    if report.missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    let cfg = Config::from_yaml(&content)?;
    let yaml = serde_yaml::to_string(&cfg)?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated, added: {}",
        report.missing.join(", ")
    ));
    Ok(true)
}
