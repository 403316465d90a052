//! Process-level lookups the backup set depends on.
//!
//! Home directory, working directory and the current time are read through
//! [`Environment`] so a run can be pinned to fixed values.

use std::env;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::error::{BackupSetError, ConfigError, Result};

pub trait Environment {
    fn home_dir(&self) -> Result<PathBuf>;
    fn current_dir(&self) -> Result<PathBuf>;
    fn now(&self) -> DateTime<Local>;
}

/// Reads `$HOME`, the process working directory and the wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Result<PathBuf> {
        match env::var_os("HOME") {
            Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
            _ => Err(ConfigError::HomeUnavailable("HOME is not set".to_string()).into()),
        }
    }

    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().map_err(|e| BackupSetError::io("stat", &PathBuf::from("."), e))
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    pub home: PathBuf,
    pub cwd: PathBuf,
    pub now: DateTime<Local>,
}

impl FixedEnvironment {
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>, now: DateTime<Local>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
            now,
        }
    }

    pub fn at(&self, now: DateTime<Local>) -> Self {
        Self {
            now,
            ..self.clone()
        }
    }
}

impl Environment for FixedEnvironment {
    fn home_dir(&self) -> Result<PathBuf> {
        Ok(self.home.clone())
    }

    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn now(&self) -> DateTime<Local> {
        self.now
    }
}
