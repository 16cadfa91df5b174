//! Filesystem locations used by the CLI.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use berth_core::Vault;

use crate::cli::Cli;

/// Resolved directories the CLI works against.
pub struct Paths {
    pub config_dir: PathBuf,
    pub ssh_dir: PathBuf,
}

impl Paths {
    /// Resolve the config directory (flag, then `BERTH_CONFIG_DIR`, then the
    /// platform config directory) and the user's `~/.ssh` directory.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config_dir = match &cli.config_dir {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine the config directory"))?
                .join("berth"),
        };

        let ssh_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not determine the home directory"))?
            .join(".ssh");

        Ok(Self {
            config_dir,
            ssh_dir,
        })
    }

    pub fn vault(&self) -> Vault {
        Vault::new(self.config_dir.clone(), self.ssh_dir.clone())
    }
}
