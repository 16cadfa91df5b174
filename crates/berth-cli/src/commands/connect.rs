//! Connecting to servers and checking their availability.

use std::time::Duration;

use anyhow::{anyhow, Result};

use berth_core::crypto::default_ssh_key;
use berth_core::{ServerRecord, Vault};

use crate::cli::{ConnectArgs, HealthArgs, PingArgs};
use crate::commands::stored_password;
use crate::config::Paths;
use crate::ssh;
use crate::ui::{self, prompt, table};

pub fn handle_connect(vault: &Vault, args: &ConnectArgs) -> Result<i32> {
    let server = match &args.query {
        Some(query) => match vault.find(query)? {
            Some(server) => server,
            None => {
                ui::error_line("Server not found");
                return Ok(1);
            }
        },
        None => {
            let servers = vault.load()?;
            if servers.is_empty() {
                ui::warn("No servers found. Add one: berth add");
                return Ok(1);
            }
            select_server(&servers, "Select server to connect")?
        }
    };

    let password = if args.no_copy {
        None
    } else {
        stored_password(&server)
    };
    Ok(ssh::connect(&server, password))
}

pub fn handle_run(vault: &Vault, paths: &Paths) -> Result<i32> {
    loop {
        let servers = vault.load()?;

        if servers.is_empty() {
            ui::warn("No servers found.");
            if !prompt::confirm("Add a server now?", true)? {
                return Ok(0);
            }
            add_interactively(vault, paths)?;
            continue;
        }

        let menu_prompt = "Select server (Enter to connect, Ctrl+C to exit)";
        let server = match select_server(&servers, menu_prompt) {
            Ok(server) => server,
            Err(_) => {
                ui::note("Exiting...");
                return Ok(0);
            }
        };

        ui::emphasis(&format!("Connecting to {}", server.name));
        let code = ssh::connect(&server, stored_password(&server));
        if code != 0 {
            ui::warn(&format!("ssh exited with code {code}"));
        }
        ui::note("Back to menu");
    }
}

pub fn handle_ping(vault: &Vault, args: &PingArgs) -> Result<i32> {
    let Some(server) = vault.find(&args.query)? else {
        ui::error_line("Server not found");
        return Ok(1);
    };

    let probe = ssh::probe(&server, parse_timeout(args.timeout)?);
    let line = format!(
        "{} ({}:{}): {} ({} ms)",
        server.name, server.host, server.port, probe.status, probe.elapsed_ms
    );

    if probe.reachable {
        ui::success(&line);
        Ok(0)
    } else {
        ui::error_line(&line);
        Ok(1)
    }
}

pub fn handle_health(vault: &Vault, args: &HealthArgs) -> Result<i32> {
    let servers = vault.load()?;
    if servers.is_empty() {
        ui::warn("No servers found. Add one: berth add");
        return Ok(0);
    }

    let timeout = parse_timeout(args.timeout)?;
    let mut all_reachable = true;
    let rows = servers
        .iter()
        .map(|server| {
            let probe = ssh::probe(server, timeout);
            all_reachable &= probe.reachable;
            vec![
                server.name.clone(),
                format!("{}:{}", server.host, server.port),
                probe.status.to_string(),
                format!("{} ms", probe.elapsed_ms),
            ]
        })
        .collect();

    ui::emphasis("Health");
    table::print_table(&["Name", "Address", "Status", "Time"], rows);

    Ok(if all_reachable { 0 } else { 1 })
}

fn parse_timeout(seconds: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(seconds).map_err(|_| anyhow!("Invalid timeout: {seconds}"))
}

/// Sort servers by name and let the user pick one.
fn select_server(servers: &[ServerRecord], message: &str) -> Result<ServerRecord> {
    let mut sorted: Vec<&ServerRecord> = servers.iter().collect();
    sorted.sort_by_key(|server| server.name.to_lowercase());

    let items: Vec<String> = sorted.iter().map(|server| server.display()).collect();
    let index = prompt::fuzzy_select(message, &items)?;
    Ok(sorted[index].clone())
}

/// The inline add flow offered by the menu when the vault is empty.
fn add_interactively(vault: &Vault, paths: &Paths) -> Result<()> {
    let name = prompt::input("Name", None)?;
    let host = prompt::input("Host", None)?;
    let port = prompt::input_port("Port", 22)?;
    let username = prompt::input("Username", None)?;

    let password = if prompt::confirm("Save password?", true)? {
        Some(prompt::password("Password")?)
    } else {
        None
    };

    let key_path = if prompt::confirm("Use private key?", false)? {
        match default_ssh_key(&paths.ssh_dir) {
            Some(path) => Some(prompt::input("Key path", Some(&path.to_string_lossy()))?),
            None => Some(prompt::input("Key path (e.g. ~/.ssh/id_rsa)", None)?),
        }
    } else {
        None
    };

    let mut server = ServerRecord::new(name, host, username).with_port(port);
    if let Some(password) = password {
        server = server.with_password(password);
    }
    if let Some(key_path) = key_path.filter(|path| !path.is_empty()) {
        server = server.with_key_path(key_path);
    }

    let added = format!("Added: {}", server.display());
    vault.upsert(server)?;
    ui::success(&added);
    Ok(())
}
