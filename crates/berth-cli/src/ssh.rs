//! Launching the system `ssh` client and probing server availability.

use std::io::ErrorKind;
use std::net::{TcpStream, ToSocketAddrs};
use std::process::Command;
use std::time::{Duration, Instant};

use berth_core::ServerRecord;

use crate::clipboard;
use crate::ui;

/// Exit code reported when no `ssh` client can be found on PATH.
pub const NO_CLIENT_EXIT: i32 = 127;

/// Exit code reported when the session is terminated by a signal.
const INTERRUPTED_EXIT: i32 = 130;

/// Spawn `ssh` for the given server and wait for it to finish.
///
/// When `password` is given it is placed on the clipboard first, so it can
/// be pasted at the password prompt. Returns the exit code to propagate.
pub fn connect(server: &ServerRecord, password: Option<&str>) -> i32 {
    if let Some(password) = password {
        match clipboard::copy(password) {
            Ok(()) => ui::success(
                "Password copied to clipboard. When prompted for Password: paste with Ctrl+V.",
            ),
            Err(error) => ui::warn(&format!("Failed to copy password: {error:#}")),
        }
    }

    let mut args: Vec<String> = vec!["-p".to_string(), server.port.to_string()];
    if let Some(key_path) = &server.key_path {
        args.push("-i".to_string());
        args.push(key_path.clone());
    }
    args.push(format!("{}@{}", server.username, server.host));

    ui::accent(&format!("SSH: ssh {}", args.join(" ")));

    match Command::new("ssh").args(&args).status() {
        Ok(status) => status.code().unwrap_or(INTERRUPTED_EXIT),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            ui::error_line("SSH client not found.");
            print_install_hints();
            NO_CLIENT_EXIT
        }
        Err(error) => {
            ui::error_line(&format!("SSH execution error: {error}"));
            1
        }
    }
}

fn print_install_hints() {
    match std::env::consts::OS {
        "windows" => {
            println!("Install OpenSSH Client:");
            println!(
                "  - Via Windows Features: Settings > Apps > Optional Features > OpenSSH Client"
            );
            println!("  - Via winget: winget install --id Microsoft.OpenSSH.Client -e");
        }
        "macos" => {
            println!("SSH client should be installed by default on macOS.");
            println!("Try: brew install openssh");
        }
        _ => {
            println!("Install SSH client via package manager:");
            println!("  - Ubuntu/Debian: sudo apt install openssh-client");
            println!("  - Fedora/RHEL: sudo dnf install openssh-clients");
            println!("  - Arch: sudo pacman -S openssh");
        }
    }
}

/// Result of a reachability probe.
pub struct Probe {
    pub reachable: bool,
    pub status: &'static str,
    pub elapsed_ms: u128,
}

/// Check whether the server accepts TCP connections on its SSH port.
pub fn probe(server: &ServerRecord, timeout: Duration) -> Probe {
    let start = Instant::now();

    let addr = match (server.host.as_str(), server.port).to_socket_addrs() {
        Ok(mut addrs) => addrs.next(),
        Err(_) => None,
    };
    let Some(addr) = addr else {
        return Probe {
            reachable: false,
            status: "DNS error",
            elapsed_ms: start.elapsed().as_millis(),
        };
    };

    match TcpStream::connect_timeout(&addr, timeout) {
        Ok(_) => Probe {
            reachable: true,
            status: "reachable",
            elapsed_ms: start.elapsed().as_millis(),
        },
        Err(error)
            if error.kind() == ErrorKind::TimedOut || error.kind() == ErrorKind::WouldBlock =>
        {
            Probe {
                reachable: false,
                status: "timeout",
                elapsed_ms: start.elapsed().as_millis(),
            }
        }
        Err(_) => Probe {
            reachable: false,
            status: "port closed",
            elapsed_ms: start.elapsed().as_millis(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;

    fn local_server(port: u16) -> ServerRecord {
        ServerRecord::new("probe-test", "127.0.0.1", "nobody").with_port(port)
    }

    #[test]
    fn test_probe_reachable_port() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
        let port = listener.local_addr().expect("addr should resolve").port();

        let result = probe(&local_server(port), Duration::from_secs(3));
        assert!(result.reachable);
        assert_eq!(result.status, "reachable");
    }

    #[test]
    fn test_probe_closed_port() {
        // Bind then drop to find a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
        let port = listener.local_addr().expect("addr should resolve").port();
        drop(listener);

        let result = probe(&local_server(port), Duration::from_secs(3));
        assert!(!result.reachable);
        assert_eq!(result.status, "port closed");
    }
}
