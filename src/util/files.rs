use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use walkdir::WalkDir;

use crate::error::{BackupSetError, Result};

/// Every regular file beneath `root_dir`, relative to it when `relative` is
/// set. Symlinks are followed: a link to a file is listed, a link to a
/// directory is descended into. Order follows the directory listing.
pub fn list_files_recursively(root_dir: &Path, relative: bool) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(root_dir).map_err(|e| BackupSetError::io("stat", root_dir, e))?;
    if !meta.is_dir() {
        return Err(BackupSetError::io(
            "list",
            root_dir,
            io::Error::other("not a directory"),
        ));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(root_dir).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| BackupSetError::io("list", root_dir, e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if relative {
            let rel = path.strip_prefix(root_dir).unwrap_or(path);
            out.push(rel.to_path_buf());
        } else {
            out.push(path.to_path_buf());
        }
    }
    Ok(out)
}

pub fn modified_time(path: &Path) -> Result<DateTime<Local>> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| BackupSetError::io("stat", path, e))?;
    Ok(DateTime::<Local>::from(modified))
}

/// Sets the modification time of a file or directory.
pub fn touch(path: &Path, when: DateTime<Local>) -> Result<()> {
    File::open(path)
        .and_then(|f| f.set_modified(SystemTime::from(when)))
        .map_err(|e| BackupSetError::io("touch", path, e))
}

/// `create_dir`, treating an existing directory as success.
pub fn create_dir_tolerant(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(err) => Err(BackupSetError::io("create", path, err)),
    }
}
