//! Enabling, disabling and inspecting password encryption.

use std::path::Path;

use anyhow::Result;

use berth_core::crypto::encryption_key;
use berth_core::Vault;

use crate::cli::{DecryptArgs, EncryptArgs};
use crate::config::Paths;
use crate::ui::{self, prompt};

pub fn handle_encrypt(vault: &Vault, paths: &Paths, args: &EncryptArgs) -> Result<i32> {
    if vault.encryption_enabled() {
        ui::warn("Encryption is already enabled.");
        return Ok(0);
    }

    let Some(key) = encryption_key(&paths.ssh_dir) else {
        ui::error_line(&format!(
            "SSH key not found (id_ed25519 or id_rsa) in {}",
            paths.ssh_dir.display()
        ));
        println!("Create one: ssh-keygen -t ed25519");
        return Ok(1);
    };

    print_encrypt_disclaimer(&key.display().to_string());

    if !args.yes {
        ui::heading("Do you understand the risks and want to enable encryption?");
        if !prompt::confirm("Continue?", false)? {
            ui::note("Cancelled.");
            return Ok(0);
        }
    }

    let count = vault.enable_encryption()?;

    println!();
    ui::success("Encryption enabled!");
    println!("Using SSH key: {}", key.display());
    println!("Encrypted servers: {count}");
    Ok(0)
}

pub fn handle_decrypt(vault: &Vault, args: &DecryptArgs) -> Result<i32> {
    if !vault.encryption_enabled() {
        ui::warn("Encryption is already disabled.");
        return Ok(0);
    }

    ui::heading("Disabling encryption");
    println!();
    println!("All passwords will be decrypted and written back to servers.json");
    println!("in plaintext. The file will be readable by anyone with access to");
    println!("this machine.");

    if !args.yes {
        println!();
        if !prompt::confirm("Are you sure you want to disable encryption?", false)? {
            ui::note("Cancelled.");
            return Ok(0);
        }
    }

    vault.disable_encryption()?;

    println!();
    ui::warn("Encryption disabled.");
    ui::warn("Passwords are now stored in plaintext!");
    Ok(0)
}

pub fn handle_status(vault: &Vault, paths: &Paths) -> Result<i32> {
    let settings = vault.load_settings();

    if settings.encryption_enabled {
        let source = settings.encryption_key_source.as_deref().unwrap_or("unknown");
        let key_exists = source != "unknown" && Path::new(source).exists();

        ui::success("Encryption enabled");
        println!();
        println!("SSH key: {source}");
        if key_exists {
            println!("Key status: exists");
        } else {
            ui::warn("Key status: not found!");
        }
        println!();
        println!("Passwords are encrypted on save and decrypted on read.");
    } else {
        ui::warn("Encryption disabled");
        println!();
        println!("Passwords are stored in plaintext in servers.json.");
        println!("To enable encryption run: berth encrypt");
        println!();
        match encryption_key(&paths.ssh_dir) {
            Some(key) => println!("Available SSH key: {}", key.display()),
            None => ui::warn("SSH key not found. Create one: ssh-keygen -t ed25519"),
        }
    }

    Ok(0)
}

fn print_encrypt_disclaimer(key: &str) {
    ui::heading("WARNING: Enabling password encryption");
    println!();
    println!("How it works:");
    println!("  - Passwords are encrypted with a key derived from your SSH key");
    println!("  - Using key: {key}");
    println!();
    println!("IMPORTANT:");
    println!("  - If you delete or change the SSH key you lose access to stored passwords");
    println!("  - Passwords can only be decrypted on this machine with this SSH key");
    println!("  - Back up the SSH key and servers.json before continuing");
    println!();
    println!("Benefits:");
    println!("  - Passwords stay protected even if servers.json leaks");
    println!("  - No master password to type on every run");
    println!("  - The SSH key is already guarded by file permissions");
    println!();
}
