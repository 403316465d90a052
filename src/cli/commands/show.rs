use crate::backup::BackupSetManager;

pub fn run_show(mgr: &BackupSetManager) {
    println!("base: {}", mgr.base_directory().display());
    println!("root: {}", mgr.backup_sets_root().display());
    println!("active: {}", mgr.backup_directory().display());
}
