use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_CURRENT_BACKUP_MINUTES: u32 = 20;
pub const DEFAULT_EXPIRED_BACKUP_DAYS: u32 = 20;

/// How long a backup directory stays reusable, and how long it is kept at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Directories touched within this many minutes are reused.
    pub max_current_backup_minutes: u32,
    /// Directories older than this many days are deleted; 0 disables expiry.
    pub expired_backup_days: u32,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_current_backup_minutes: DEFAULT_MAX_CURRENT_BACKUP_MINUTES,
            expired_backup_days: DEFAULT_EXPIRED_BACKUP_DAYS,
        }
    }
}

impl RotationPolicy {
    pub fn expires(&self) -> bool {
        self.expired_backup_days != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    Copied(PathBuf),
    AlreadyPresent(PathBuf),
}

impl BackupOutcome {
    pub fn destination(&self) -> &Path {
        match self {
            BackupOutcome::Copied(path) | BackupOutcome::AlreadyPresent(path) => path,
        }
    }

    pub fn was_copied(&self) -> bool {
        matches!(self, BackupOutcome::Copied(_))
    }
}
