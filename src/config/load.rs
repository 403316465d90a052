use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::model::Config;
use crate::error::{BackupSetError, ConfigError, Result};

pub fn load_config(path: &Path) -> Result<Config> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| BackupSetError::io("read", path, e))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let cfg: Config =
        serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
    if let Some(name) = &cfg.backup_name {
        if name.trim().is_empty() {
            return Err(ConfigError::Invalid("backupName is empty".to_string()).into());
        }
    }
    if let Some(dir) = &cfg.base_directory {
        if dir.trim().is_empty() {
            return Err(ConfigError::Invalid("baseDirectory is empty".to_string()).into());
        }
    }
    Ok(cfg)
}
