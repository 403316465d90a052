use serde::{Deserialize, Serialize};

/// Optional defaults file for the command line tool.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, rename = "backupName", skip_serializing_if = "Option::is_none")]
    pub backup_name: Option<String>,
    #[serde(default, rename = "baseDirectory", skip_serializing_if = "Option::is_none")]
    pub base_directory: Option<String>,
    #[serde(
        default,
        rename = "maxCurrentBackupMinutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_current_backup_minutes: Option<u32>,
    #[serde(default, rename = "expiredBackupDays", skip_serializing_if = "Option::is_none")]
    pub expired_backup_days: Option<u32>,
}
