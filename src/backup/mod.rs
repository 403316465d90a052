use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::environment::{Environment, SystemEnvironment};
use crate::error::{BackupSetError, ConfigError, Result};
use crate::types::{BackupOutcome, RotationPolicy};
use crate::util::files::{create_dir_tolerant, list_files_recursively};
use crate::util::paths::{absolute_from, backup_sets_dir, relative_under};

pub mod rotation;

/// One backup session: a base directory whose files are protected, and the
/// backup directory that receives copies of them.
///
/// Opening a manager expires old backup directories and picks (or creates)
/// the active one. See [`rotation`] for the cross-process caveats.
#[derive(Debug, Clone)]
pub struct BackupSetManager {
    base_directory: PathBuf,
    backup_sets_root: PathBuf,
    backup_directory: PathBuf,
}

impl BackupSetManager {
    pub fn new(backup_name: &str, base_directory: Option<&Path>) -> Result<Self> {
        Self::with_policy(backup_name, base_directory, RotationPolicy::default())
    }

    pub fn with_policy(
        backup_name: &str,
        base_directory: Option<&Path>,
        policy: RotationPolicy,
    ) -> Result<Self> {
        Self::with_environment(backup_name, base_directory, policy, &SystemEnvironment)
    }

    pub fn with_environment(
        backup_name: &str,
        base_directory: Option<&Path>,
        policy: RotationPolicy,
        env: &dyn Environment,
    ) -> Result<Self> {
        if backup_name.trim().is_empty() {
            return Err(ConfigError::EmptyBackupName.into());
        }
        let now = env.now();
        let cwd = env.current_dir()?;
        let base_directory = absolute_from(base_directory.unwrap_or(Path::new("")), &cwd);

        let backup_sets_root = backup_sets_dir(&env.home_dir()?, backup_name);
        create_dir_tolerant(&backup_sets_root)?;

        let mut candidates = rotation::list_candidates(&backup_sets_root)?;
        if policy.expires() {
            rotation::expire(&mut candidates, now, policy.expired_backup_days)?;
        }
        let backup_directory = rotation::select_or_create(
            &backup_sets_root,
            &candidates,
            now,
            policy.max_current_backup_minutes,
        )?;

        Ok(Self {
            base_directory,
            backup_sets_root,
            backup_directory,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn backup_sets_root(&self) -> &Path {
        &self.backup_sets_root
    }

    pub fn backup_directory(&self) -> &Path {
        &self.backup_directory
    }

    /// Copies `file_path` (absolute, or relative to the base directory) into
    /// the backup directory at the same relative location. A file already
    /// backed up there is left alone, even if the source has since changed.
    pub fn backup_file(&self, file_path: impl AsRef<Path>) -> Result<BackupOutcome> {
        let source = absolute_from(file_path.as_ref(), &self.base_directory);
        let rel = relative_under(&source, &self.base_directory)?;
        let dest = self.backup_directory.join(&rel);

        let exists = dest
            .try_exists()
            .map_err(|e| BackupSetError::io("stat", &dest, e))?;
        if exists {
            debug!(file = %rel.display(), "already backed up");
            return Ok(BackupOutcome::AlreadyPresent(dest));
        }

        let meta = fs::metadata(&source).map_err(|e| BackupSetError::io("stat", &source, e))?;
        if !meta.is_file() {
            return Err(BackupSetError::io(
                "copy",
                &source,
                io::Error::other("not a regular file"),
            ));
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| BackupSetError::io("create", parent, e))?;
        }
        fs::copy(&source, &dest).map_err(|e| BackupSetError::io("copy", &source, e))?;
        debug!(file = %rel.display(), "backed up");
        Ok(BackupOutcome::Copied(dest))
    }

    /// Files in the backup directory, relative to it, in no particular order.
    pub fn list_backed_up_files(&self) -> Result<Vec<PathBuf>> {
        list_files_recursively(&self.backup_directory, true)
    }
}
