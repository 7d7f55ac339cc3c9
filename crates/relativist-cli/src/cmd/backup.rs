// crates/relativist-cli/src/cmd/backup.rs

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Subcommand};
use relativist_core::export::{backup_file_name, export_backup, import_backup};

use super::DEFAULT_STORE;
use crate::io::store_file::FileStore;

#[derive(Args, Debug)]
pub struct BackupArgs {
    #[command(subcommand)]
    pub cmd: BackupCmd,
}

#[derive(Subcommand, Debug)]
pub enum BackupCmd {
    /// Write the persisted game state to a backup file
    Export(BackupExportArgs),
    /// Restore a backup file into the store
    Import(BackupImportArgs),
}

#[derive(Args, Debug)]
pub struct BackupExportArgs {
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,

    /// Defaults to relativist-backup-YYYY-MM-DD.json
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Args, Debug)]
pub struct BackupImportArgs {
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,

    #[arg(long)]
    pub r#in: String,
}

pub fn run(args: BackupArgs) -> anyhow::Result<()> {
    match args.cmd {
        BackupCmd::Export(a) => export(a),
        BackupCmd::Import(a) => import(a),
    }
}

fn export(args: BackupExportArgs) -> anyhow::Result<()> {
    let store = FileStore::open(&args.store)?;
    let exported_at = Utc::now();
    let out = args.out.unwrap_or_else(|| backup_file_name(exported_at));

    let text = export_backup(&store, exported_at)?;
    std::fs::write(&out, &text).with_context(|| format!("write {out}"))?;

    eprintln!("wrote backup {out} ({} bytes)", text.len());
    Ok(())
}

fn import(args: BackupImportArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.r#in).with_context(|| format!("read {}", args.r#in))?;
    let mut store = FileStore::open(&args.store)?;

    let restored = import_backup(&text, &mut store)
        .with_context(|| format!("import {}", args.r#in))?;

    eprintln!("restored {restored} key(s) into {}", store.path().display());
    println!("restored={restored}");
    Ok(())
}
