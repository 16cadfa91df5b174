//! Server profile management: list, add, edit, remove and password access.

use anyhow::Result;

use berth_core::crypto::default_ssh_key;
use berth_core::{ServerRecord, StoredPassword, Vault};

use crate::cli::{AddArgs, CopyPassArgs, EditArgs, RemoveArgs, ShowPassArgs};
use crate::clipboard;
use crate::commands::stored_password;
use crate::config::Paths;
use crate::ui::{self, prompt, table};

pub fn handle_list(vault: &Vault) -> Result<i32> {
    let servers = vault.load()?;
    if servers.is_empty() {
        ui::warn("No servers found. Add one: berth add");
        return Ok(0);
    }

    table::print_server_table(&servers);
    Ok(0)
}

pub fn handle_add(vault: &Vault, paths: &Paths, args: &AddArgs) -> Result<i32> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt::input("Server name", None)?,
    };
    let host = match &args.host {
        Some(host) => host.clone(),
        None => prompt::input("Host", None)?,
    };
    let port = match args.port {
        Some(port) => port,
        None if prompt::interactive() => prompt::input_port("Port", 22)?,
        None => 22,
    };
    let username = match &args.username {
        Some(username) => username.clone(),
        None => prompt::input("Username", None)?,
    };

    let password = if args.with_password {
        Some(prompt::password("Password")?)
    } else {
        None
    };

    let key_path = if args.use_key && args.key_path.is_none() {
        match default_ssh_key(&paths.ssh_dir) {
            Some(path) => Some(prompt::input(
                "Path to private key",
                Some(&path.to_string_lossy()),
            )?),
            None => Some(prompt::input(
                "Path to private key (e.g. ~/.ssh/id_rsa)",
                None,
            )?),
        }
    } else {
        args.key_path.clone()
    };

    let mut server = ServerRecord::new(name, host, username).with_port(port);
    if let Some(password) = password {
        server = server.with_password(password);
    }
    if let Some(key_path) = key_path.filter(|path| !path.is_empty()) {
        server = server.with_key_path(key_path);
    }

    let added = format!("Added: {}  (id: {})", server.display(), server.id);
    vault.upsert(server)?;
    ui::success(&added);
    Ok(0)
}

pub fn handle_remove(vault: &Vault, args: &RemoveArgs) -> Result<i32> {
    let Some(server) = vault.find(&args.query)? else {
        ui::error_line("Server not found");
        return Ok(1);
    };

    if !args.yes {
        let question = format!(
            "Remove '{}' ({}@{}:{})?",
            server.name, server.username, server.host, server.port
        );
        if !prompt::confirm(&question, false)? {
            return Ok(1);
        }
    }

    if vault.remove(&server.id)? {
        ui::success("Removed.");
    } else {
        ui::warn("Nothing to remove.");
    }
    Ok(0)
}

pub fn handle_edit(vault: &Vault, paths: &Paths, args: &EditArgs) -> Result<i32> {
    let Some(mut server) = vault.find(&args.query)? else {
        ui::error_line("Server not found");
        return Ok(1);
    };

    let name = prompt::input("Name", Some(&server.name))?;
    let host = prompt::input("Host", Some(&server.host))?;
    let port = prompt::input_port("Port", server.port)?;
    let username = prompt::input("Username", Some(&server.username))?;

    // Offer the current key, or a discovered default when none is set.
    let key_default = server
        .key_path
        .clone()
        .or_else(|| default_ssh_key(&paths.ssh_dir).map(|p| p.to_string_lossy().into_owned()))
        .unwrap_or_default();
    let key_path = prompt::input_optional("Key path (empty for none)", &key_default)?;

    let mut password = server.password.clone();
    if prompt::confirm("Change password?", false)? {
        if prompt::confirm("Clear password?", false)? {
            password = None;
        } else {
            password = Some(StoredPassword::plain(prompt::password("New password")?));
        }
    }

    server.name = name;
    server.host = host;
    server.port = port;
    server.username = username;
    server.key_path = if key_path.is_empty() {
        None
    } else {
        Some(key_path)
    };
    server.password = password;

    vault.upsert(server)?;
    ui::success("Saved.");
    Ok(0)
}

pub fn handle_copy_pass(vault: &Vault, args: &CopyPassArgs) -> Result<i32> {
    let Some(server) = vault.find(&args.query)? else {
        ui::error_line("Server not found or has no password");
        return Ok(1);
    };
    let Some(password) = stored_password(&server) else {
        ui::error_line("Server not found or has no password");
        return Ok(1);
    };

    clipboard::copy(password)?;
    ui::success("Password copied.");
    Ok(0)
}

pub fn handle_show_pass(vault: &Vault, args: &ShowPassArgs) -> Result<i32> {
    let Some(server) = vault.find(&args.query)? else {
        ui::error_line("Server not found or has no password");
        return Ok(1);
    };
    let Some(password) = stored_password(&server) else {
        ui::error_line("Server not found or has no password");
        return Ok(1);
    };

    if args.plain {
        ui::emphasis(password);
    } else {
        ui::emphasis(&table::mask_password(password));
    }
    Ok(0)
}
