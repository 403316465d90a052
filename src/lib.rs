//! Rotating backup sets: hidden per-user directories that collect copies of
//! files before they are modified.

pub mod backup;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod types;
pub mod util;

pub use backup::BackupSetManager;
pub use environment::{Environment, FixedEnvironment, SystemEnvironment};
pub use error::{BackupSetError, ConfigError, PathError, Result};
pub use types::{BackupOutcome, RotationPolicy};
pub use util::files::list_files_recursively;
pub use util::paths::{backup_sets_dir, sanitize_for_path};
