use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use berth_core::VERSION;

/// Berth - quick server selection, connection and password management over SSH
#[derive(Parser)]
#[command(name = "berth")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding servers.json and settings.json
    #[arg(long, global = true, env = "BERTH_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Server name
    #[arg(long)]
    pub name: Option<String>,

    /// Host to connect to
    #[arg(long)]
    pub host: Option<String>,

    /// SSH port
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Login username
    #[arg(long)]
    pub username: Option<String>,

    /// Use a private key
    #[arg(long = "key")]
    pub use_key: bool,

    /// Path to the private key
    #[arg(long, value_name = "PATH")]
    pub key_path: Option<String>,

    /// Prompt for a password to save
    #[arg(long = "password")]
    pub with_password: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

/// Arguments for the `connect` command
#[derive(Args)]
pub struct ConnectArgs {
    /// ID, name or partial name (interactive selection when omitted)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Don't copy the password to the clipboard
    #[arg(long)]
    pub no_copy: bool,
}

/// Arguments for the `copy-pass` command
#[derive(Args)]
pub struct CopyPassArgs {
    /// ID, name or partial name
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// ID, name or partial name
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Force plaintext passwords in the export
    #[arg(long, conflicts_with = "encrypted")]
    pub plain: bool,

    /// Force encrypted passwords in the export
    #[arg(long)]
    pub encrypted: bool,
}

/// Arguments for the `health` command
#[derive(Args)]
pub struct HealthArgs {
    /// Connection timeout in seconds
    #[arg(long, default_value_t = 3.0, value_name = "SECONDS")]
    pub timeout: f64,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Path to a previously exported JSON document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the `ping` command
#[derive(Args)]
pub struct PingArgs {
    /// ID, name or partial name
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Connection timeout in seconds
    #[arg(long, default_value_t = 3.0, value_name = "SECONDS")]
    pub timeout: f64,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// ID, name or partial name
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `show-pass` command
#[derive(Args)]
pub struct ShowPassArgs {
    /// ID, name or partial name
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Show in plaintext instead of masked
    #[arg(long)]
    pub plain: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new server
    #[command(visible_alias = "a")]
    Add(AddArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Connect to a server
    #[command(visible_alias = "c")]
    Connect(ConnectArgs),

    /// Copy a server password to the clipboard
    #[command(visible_alias = "cp")]
    CopyPass(CopyPassArgs),

    /// Disable password encryption (decrypt all passwords)
    Decrypt(DecryptArgs),

    /// Edit a server
    #[command(visible_alias = "e")]
    Edit(EditArgs),

    /// Enable password encryption (SSH key based)
    Encrypt(EncryptArgs),

    /// Show encryption status
    EncryptionStatus,

    /// Export servers to a JSON document
    #[command(visible_alias = "ex")]
    Export(ExportArgs),

    /// Check availability of all servers
    #[command(visible_alias = "h")]
    Health(HealthArgs),

    /// Import servers from a JSON document
    #[command(visible_alias = "im")]
    Import(ImportArgs),

    /// Show the list of servers
    #[command(visible_alias = "ls")]
    List,

    /// Check whether a server is reachable
    #[command(visible_alias = "p")]
    Ping(PingArgs),

    /// Remove a server
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// Interactive server selection menu
    Run,

    /// Show a server password
    #[command(visible_alias = "sp")]
    ShowPass(ShowPassArgs),
}
