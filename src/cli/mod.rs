use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::backup::BackupSetManager;
use crate::cli::args::{Cli, Command};
use crate::cli::commands::{backup, exit_for_error, list, show};
use crate::config::load::load_config;
use crate::config::model::Config;
use crate::error::{self, ConfigError};
use crate::types::RotationPolicy;
use crate::util::paths::sanitize_for_path;

pub mod args;
pub mod commands;

const LOG_ENV: &str = "BACKUPSET_LOG";

/// Flags, then the config file, then built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backup_name: String,
    pub base_directory: Option<PathBuf>,
    pub policy: RotationPolicy,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::Sanitize { name } = &cli.command {
        println!("{}", sanitize_for_path(name));
        return Ok(());
    }

    let cfg = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(cfg) => cfg,
            Err(err) => exit_for_error(&err),
        },
        None => Config::default(),
    };
    let settings = match resolve_settings(&cli, cfg) {
        Ok(settings) => settings,
        Err(err) => exit_for_error(&err),
    };
    if let Err(err) = run_command(&cli.command, &settings) {
        exit_for_error(&err);
    }
    Ok(())
}

fn run_command(command: &Command, settings: &Settings) -> error::Result<()> {
    let mgr = BackupSetManager::with_policy(
        &settings.backup_name,
        settings.base_directory.as_deref(),
        settings.policy,
    )?;
    match command {
        Command::Backup { files } => backup::run_backup(&mgr, files),
        Command::List => list::run_list(&mgr),
        Command::Show => {
            show::run_show(&mgr);
            Ok(())
        }
        Command::Sanitize { .. } => Ok(()),
    }
}

pub fn resolve_settings(cli: &Cli, cfg: Config) -> error::Result<Settings> {
    let defaults = RotationPolicy::default();
    let backup_name = cli
        .name
        .clone()
        .or(cfg.backup_name)
        .filter(|name| !name.trim().is_empty())
        .ok_or(ConfigError::EmptyBackupName)?;
    let base_directory = cli
        .base_dir
        .clone()
        .or_else(|| cfg.base_directory.map(PathBuf::from));
    let policy = RotationPolicy {
        max_current_backup_minutes: cli
            .max_current_minutes
            .or(cfg.max_current_backup_minutes)
            .unwrap_or(defaults.max_current_backup_minutes),
        expired_backup_days: cli
            .expired_days
            .or(cfg.expired_backup_days)
            .unwrap_or(defaults.expired_backup_days),
    };
    Ok(Settings {
        backup_name,
        base_directory,
        policy,
    })
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
