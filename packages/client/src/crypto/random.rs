//! Random nonce generation

use ring::rand::{SecureRandom, SystemRandom};

use crate::error::{self, Result};

const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of the `SignatureNonce` the API expects from this client.
pub const NONCE_LEN: usize = 64;

/// Generate a random alphanumeric string of `len` characters.
///
/// # Errors
///
/// Returns a signing error if the system random source fails.
pub fn alphanumeric(len: usize) -> Result<String> {
    let mut bytes = vec![0u8; len];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| error::sign("system random source unavailable"))?;
    Ok(bytes
        .into_iter()
        .map(|b| char::from(ALPHANUMERIC[usize::from(b) % ALPHANUMERIC.len()]))
        .collect())
}

/// Generate nonce for request signing
///
/// # Errors
///
/// Returns a signing error if the system random source fails.
pub fn generate_nonce() -> Result<String> {
    alphanumeric(NONCE_LEN)
}
