//! Listing, expiring and selecting backup directories inside a backup-sets root.
//!
//! Nothing here is locked. Two processes working on the same root may each
//! create their own new directory, or one may expire a directory the other
//! has just picked. Callers accept that; "already exists" and "already gone"
//! are the only races smoothed over.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local};
use tracing::{debug, info};

use crate::error::{BackupSetError, Result};
use crate::util::files::{create_dir_tolerant, modified_time, touch};

pub const BACKUP_DIR_PREFIX: &str = "_backups_";
const BACKUP_DIR_TIMESTAMP: &str = "%Y%m%d-%H%M%S";

#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

impl Candidate {
    fn name(&self) -> &std::ffi::OsStr {
        self.path.file_name().unwrap_or_default()
    }
}

pub fn backup_dir_name(now: DateTime<Local>) -> String {
    format!("{}{}", BACKUP_DIR_PREFIX, now.format(BACKUP_DIR_TIMESTAMP))
}

/// Immediate subdirectories of `sets_dir` carrying the backup prefix.
pub fn list_candidates(sets_dir: &Path) -> Result<Vec<Candidate>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(sets_dir).map_err(|e| BackupSetError::io("read", sets_dir, e))? {
        let entry = entry.map_err(|e| BackupSetError::io("read", sets_dir, e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.starts_with(BACKUP_DIR_PREFIX) {
            continue;
        }
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(candidate) = candidate_at(path)? {
            out.push(candidate);
        }
    }
    debug!(root = %sets_dir.display(), count = out.len(), "backup directories found");
    Ok(out)
}

/// Reads the mtime of a listed directory. `None` when it was removed after
/// the listing.
fn candidate_at(path: PathBuf) -> Result<Option<Candidate>> {
    match modified_time(&path) {
        Ok(modified) => Ok(Some(Candidate { path, modified })),
        Err(err) if err.io_kind() == Some(io::ErrorKind::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

/// `now - span` in whole seconds, or `None` when that lies before the
/// earliest representable time.
fn cutoff_secs(now: DateTime<Local>, span: Duration) -> Option<i64> {
    now.checked_sub_signed(span).map(|t| t.timestamp())
}

/// Deletes candidates last modified before `now - days` and drops them from
/// the list in the same pass.
pub fn expire(candidates: &mut Vec<Candidate>, now: DateTime<Local>, days: u32) -> Result<()> {
    let Some(cutoff) = cutoff_secs(now, Duration::days(i64::from(days))) else {
        return Ok(());
    };
    let mut retained = Vec::with_capacity(candidates.len());
    for candidate in candidates.drain(..) {
        if candidate.modified.timestamp() >= cutoff {
            retained.push(candidate);
            continue;
        }
        info!(dir = %candidate.path.display(), "delete expired backup directory");
        match fs::remove_dir_all(&candidate.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(BackupSetError::io("delete", &candidate.path, err)),
        }
    }
    *candidates = retained;
    Ok(())
}

/// Most recently modified candidate no older than `now - minutes`. Equal
/// times go to the greatest directory name.
pub fn most_recent<'a>(
    candidates: &'a [Candidate],
    now: DateTime<Local>,
    minutes: u32,
) -> Option<&'a Candidate> {
    let cutoff = cutoff_secs(now, Duration::minutes(i64::from(minutes)));
    candidates
        .iter()
        .filter(|c| cutoff.map_or(true, |cutoff| c.modified.timestamp() >= cutoff))
        .max_by(|a, b| {
            a.modified
                .timestamp()
                .cmp(&b.modified.timestamp())
                .then_with(|| a.name().cmp(b.name()))
        })
}

/// Reuses the most recent current directory (touching it), or creates a new
/// timestamped one stamped with `now`.
pub fn select_or_create(
    sets_dir: &Path,
    candidates: &[Candidate],
    now: DateTime<Local>,
    max_current_minutes: u32,
) -> Result<PathBuf> {
    if let Some(current) = most_recent(candidates, now, max_current_minutes) {
        debug!(dir = %current.path.display(), "reuse current backup directory");
        touch(&current.path, now)?;
        return Ok(current.path.clone());
    }
    let path = sets_dir.join(backup_dir_name(now));
    info!(dir = %path.display(), "create backup directory");
    create_dir_tolerant(&path)?;
    touch(&path, now)?;
    Ok(path)
}
