use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "backupset", version, about = "Rotating backup sets under the home directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backup set name (sanitized into the directory name)
    #[arg(long, short = 'n', global = true)]
    pub name: Option<String>,
    /// Directory whose files are protected; defaults to the working directory
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,
    #[arg(long, global = true)]
    pub max_current_minutes: Option<u32>,
    /// 0 disables expiry
    #[arg(long, global = true)]
    pub expired_days: Option<u32>,

    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Copy files into the active backup directory
    Backup {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List files in the active backup directory
    List,
    /// Print the base, root and active backup directories
    Show,
    /// Print a name as it appears in the backup-sets directory
    Sanitize { name: String },
}
