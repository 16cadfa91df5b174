//! Table rendering and small formatting helpers.

use std::io::IsTerminal;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use berth_core::ServerRecord;

/// Render a borderless table with dim headers to stdout.
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let tty = std::io::stdout().is_terminal();

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|header| {
            let cell = Cell::new(header);
            if tty {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    for i in 0..headers.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }

    println!("{table}");
}

/// Print the standard server listing.
pub fn print_server_table(servers: &[ServerRecord]) {
    super::emphasis("Servers");

    let rows = servers
        .iter()
        .map(|server| {
            vec![
                short_id(&server.id).to_string(),
                server.name.clone(),
                format!("{}@{}:{}", server.username, server.host, server.port),
                server.auth_label().to_string(),
            ]
        })
        .collect();

    print_table(&["ID", "Name", "Connection", "Auth"], rows);
}

/// First eight characters of an ID, or the whole ID when shorter.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Mask a password for display, keeping the first and last character.
pub fn mask_password(password: &str) -> String {
    let first: String = password.chars().take(1).collect();
    let last: String = password
        .chars()
        .next_back()
        .map(String::from)
        .unwrap_or_default();
    let hidden = password.chars().count().saturating_sub(2).max(4);

    format!("{}{}{}", first, "*".repeat(hidden), last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_truncates_uuid() {
        assert_eq!(short_id("7a2e3c0b-1234-5678-9abc-def012345678"), "7a2e3c0b");
    }

    #[test]
    fn test_short_id_keeps_short_ids() {
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_short_id_handles_multibyte() {
        // Falls back to the full ID when byte 8 is not a char boundary.
        assert_eq!(short_id("abcdefgé"), "abcdefgé");
    }

    #[test]
    fn test_mask_password_keeps_edges() {
        assert_eq!(mask_password("secret"), "s****t");
        assert_eq!(mask_password("longpassword"), "l**********d");
    }

    #[test]
    fn test_mask_password_short_values() {
        assert_eq!(mask_password("x"), "x****x");
        assert_eq!(mask_password("ab"), "a****b");
    }
}
