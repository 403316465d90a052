use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupSetError {
    #[error("{0}")]
    Config(ConfigError),
    #[error("{0}")]
    Path(PathError),
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("backup name is empty")]
    EmptyBackupName,
    #[error("home directory unavailable: {0}")]
    HomeUnavailable(String),
    #[error("parse config: {0}")]
    Parse(String),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("{} is not inside base directory {}", .path.display(), .base.display())]
    OutsideBase { path: PathBuf, base: PathBuf },
}

pub type Result<T> = std::result::Result<T, BackupSetError>;

impl BackupSetError {
    pub fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        BackupSetError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Underlying `io::ErrorKind`, if this is a file-system failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            BackupSetError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

impl From<ConfigError> for BackupSetError {
    fn from(err: ConfigError) -> Self {
        BackupSetError::Config(err)
    }
}

impl From<PathError> for BackupSetError {
    fn from(err: PathError) -> Self {
        BackupSetError::Path(err)
    }
}
