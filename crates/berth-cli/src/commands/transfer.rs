//! Exporting and importing the server list as a JSON document.

use std::fs;

use anyhow::{Context, Result};

use berth_core::storage::interchange::{self, ExportDocument, ExportPolicy};
use berth_core::Vault;

use crate::cli::{ExportArgs, ImportArgs};
use crate::ui;

pub fn handle_export(vault: &Vault, args: &ExportArgs) -> Result<i32> {
    let policy = if args.plain {
        ExportPolicy::Plain
    } else if args.encrypted {
        ExportPolicy::Encrypted
    } else {
        ExportPolicy::FollowVault
    };

    let document = interchange::export_servers(vault, policy)?;
    let json = serde_json::to_string_pretty(&document)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ui::success(&format!(
                "Exported {} servers to {}",
                document.servers.len(),
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(0)
}

pub fn handle_import(vault: &Vault, args: &ImportArgs) -> Result<i32> {
    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let document: ExportDocument =
        serde_json::from_str(&contents).context("Invalid export document")?;

    let count = interchange::import_servers(vault, document)?;
    ui::success(&format!("Imported {count} servers."));
    Ok(0)
}
