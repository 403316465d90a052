use std::path::{Component, Path, PathBuf};

use crate::error::{PathError, Result};

const BACKUP_SETS_DIR_PREFIX: &str = "._backupset_";
const BACKUP_SETS_DIR_SUFFIX: &str = "_";

/// Replaces every character outside `[A-Za-z0-9_]` with `_`, one for one.
pub fn sanitize_for_path(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Hidden per-name directory under `home` that holds the backup directories.
/// Names that sanitize identically share a directory.
pub fn backup_sets_dir(home: &Path, backup_name: &str) -> PathBuf {
    home.join(format!(
        "{}{}{}",
        BACKUP_SETS_DIR_PREFIX,
        sanitize_for_path(backup_name),
        BACKUP_SETS_DIR_SUFFIX
    ))
}

/// Drops `.` components and folds `..` into its parent without touching the
/// file system.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

pub fn absolute_from(path: &Path, relative_to: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&relative_to.join(path))
    }
}

/// `path` relative to `base`; both are expected to be absolute and normalized.
pub fn relative_under(path: &Path, base: &Path) -> Result<PathBuf> {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => Ok(rel.to_path_buf()),
        _ => Err(PathError::OutsideBase {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackupSetError;

    #[test]
    fn sanitize_replaces_disallowed_characters() {
        assert_eq!(sanitize_for_path("abcd"), "abcd");
        assert_eq!(sanitize_for_path("ab/c\\d"), "ab_c_d");
        assert_eq!(sanitize_for_path("my/app"), "my_app");
        assert_eq!(sanitize_for_path("A-Z.0 9"), "A_Z_0_9");
        assert_eq!(sanitize_for_path(""), "");
    }

    #[test]
    fn sanitize_is_per_character() {
        let input = "héllo wörld";
        let out = sanitize_for_path(input);
        assert_eq!(out, "h_llo_w_rld");
        assert_eq!(out.chars().count(), input.chars().count());
    }

    #[test]
    fn sanitize_is_idempotent() {
        for s in ["", "plain", "a/b/c", "..", "x y-z", "__init__", "ünï"] {
            let once = sanitize_for_path(s);
            assert_eq!(sanitize_for_path(&once), once);
        }
    }

    #[test]
    fn backup_sets_dir_uses_sanitized_name() {
        let home = Path::new("/home/u");
        assert_eq!(
            backup_sets_dir(home, "my/app"),
            PathBuf::from("/home/u/._backupset_my_app_")
        );
        assert_eq!(backup_sets_dir(home, "my/app"), backup_sets_dir(home, "my.app"));
        assert_ne!(backup_sets_dir(home, "my/app"), backup_sets_dir(home, "myapp"));
    }

    #[test]
    fn normalize_folds_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize(Path::new("../../b")), PathBuf::from("../../b"));
    }

    #[test]
    fn absolute_from_joins_relative_paths() {
        let base = Path::new("/work");
        assert_eq!(absolute_from(Path::new("sub/a.txt"), base), PathBuf::from("/work/sub/a.txt"));
        assert_eq!(absolute_from(Path::new("/etc/x"), base), PathBuf::from("/etc/x"));
        assert_eq!(absolute_from(Path::new("../x"), base), PathBuf::from("/x"));
    }

    #[test]
    fn relative_under_rejects_paths_outside_base() {
        let base = Path::new("/work");
        assert_eq!(
            relative_under(Path::new("/work/sub/a.txt"), base).unwrap(),
            PathBuf::from("sub/a.txt")
        );
        let err = relative_under(Path::new("/workshop/a.txt"), base).unwrap_err();
        assert!(matches!(err, BackupSetError::Path(PathError::OutsideBase { .. })));
        assert!(relative_under(Path::new("/work"), base).is_err());
    }
}
