pub mod backup;
pub mod list;
pub mod show;

use crate::error::BackupSetError;

pub fn exit_code(err: &BackupSetError) -> i32 {
    match err {
        BackupSetError::Config(_) => 2,
        BackupSetError::Path(_) => 3,
        BackupSetError::Io { .. } => 1,
    }
}

pub fn exit_for_error(err: &BackupSetError) -> ! {
    eprintln!("{}", err);
    std::process::exit(exit_code(err));
}
