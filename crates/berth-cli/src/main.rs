//! Berth CLI - quick server selection, connection and password management
//! over SSH.
//!
//! This is the command-line interface for Berth. It wires the vault in
//! `berth-core` to interactive prompts, table output and the local `ssh`
//! client.

mod cli;
mod clipboard;
mod commands;
mod config;
mod ssh;
mod ui;

use clap::Parser;

use berth_core::VERSION;

use crate::cli::{Cli, Commands};
use crate::commands::{connect, encryption, misc, servers, transfer};
use crate::config::Paths;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(error) => {
            ui::print_error(&format!("{error:#}"));
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let paths = Paths::resolve(cli)?;
    let vault = paths.vault();

    let Some(command) = &cli.command else {
        print_quickstart();
        return Ok(0);
    };

    match command {
        Commands::Add(args) => servers::handle_add(&vault, &paths, args),
        Commands::Completions(args) => misc::handle_completions(args),
        Commands::Connect(args) => connect::handle_connect(&vault, args),
        Commands::CopyPass(args) => servers::handle_copy_pass(&vault, args),
        Commands::Decrypt(args) => encryption::handle_decrypt(&vault, args),
        Commands::Edit(args) => servers::handle_edit(&vault, &paths, args),
        Commands::Encrypt(args) => encryption::handle_encrypt(&vault, &paths, args),
        Commands::EncryptionStatus => encryption::handle_status(&vault, &paths),
        Commands::Export(args) => transfer::handle_export(&vault, args),
        Commands::Health(args) => connect::handle_health(&vault, args),
        Commands::Import(args) => transfer::handle_import(&vault, args),
        Commands::List => servers::handle_list(&vault),
        Commands::Ping(args) => connect::handle_ping(&vault, args),
        Commands::Remove(args) => servers::handle_remove(&vault, args),
        Commands::Run => connect::handle_run(&vault, &paths),
        Commands::ShowPass(args) => servers::handle_show_pass(&vault, args),
    }
}

fn print_quickstart() {
    println!("Berth v{}", VERSION);
    println!("\nQuickstart:");
    println!("  berth add");
    println!("  berth list");
    println!("  berth connect <name>");
    println!("  berth encrypt");
    println!("\nRun `berth --help` for full usage.");
}
