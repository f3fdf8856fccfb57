mod cli;
mod commands;

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use shelfmark_catalog::{CatalogManager, FilesystemStore};

use crate::commands::handle_command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    let store = FilesystemStore::new(&data_dir);
    store.initialize().await?;
    tracing::debug!("Using reading-list store at {}", data_dir.display());

    let mut manager = CatalogManager::open(Box::new(store)).await?;
    handle_command(cli.command, &mut manager).await
}

fn default_data_dir() -> eyre::Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "shelfmark", "shelfmark")
        .ok_or_else(|| eyre::eyre!("Could not determine a data directory for this platform"))?;
    Ok(dirs.data_dir().to_path_buf())
}
