use crate::backup::BackupSetManager;
use crate::error::Result;

pub fn run_list(mgr: &BackupSetManager) -> Result<()> {
    let mut files = mgr.list_backed_up_files()?;
    files.sort();
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}
