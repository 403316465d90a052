use std::path::PathBuf;

use crate::backup::BackupSetManager;
use crate::error::Result;
use crate::types::BackupOutcome;

pub fn run_backup(mgr: &BackupSetManager, files: &[PathBuf]) -> Result<()> {
    for file in files {
        let outcome = mgr.backup_file(file)?;
        let rel = outcome
            .destination()
            .strip_prefix(mgr.backup_directory())
            .unwrap_or(outcome.destination());
        match &outcome {
            BackupOutcome::Copied(_) => println!("copied {}", rel.display()),
            BackupOutcome::AlreadyPresent(_) => println!("kept {}", rel.display()),
        }
    }
    Ok(())
}
