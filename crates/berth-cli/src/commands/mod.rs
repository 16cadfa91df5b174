pub mod connect;
pub mod encryption;
pub mod misc;
pub mod servers;
pub mod transfer;

use berth_core::ServerRecord;

/// The stored password as it currently is, if one is set.
///
/// After a load with a missing key this can still be ciphertext; the vault
/// has already logged a warning for that record.
pub(crate) fn stored_password(server: &ServerRecord) -> Option<&str> {
    server
        .password
        .as_ref()
        .filter(|password| password.is_set())
        .map(|password| password.as_str())
}
