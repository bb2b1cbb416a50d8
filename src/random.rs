//! Random token helpers backed by the operating system entropy source.

use rand::rngs::OsRng;
use rand::Rng;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const DIGITS: &[u8] = b"0123456789";

/// Draws `len` characters uniformly from `alphabet`, which must be a
/// non-empty ASCII set supplied by the caller.
pub fn token(len: usize, alphabet: &[u8]) -> String {
    debug_assert!(!alphabet.is_empty());
    let mut rng = OsRng;
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Random `[A-Za-z0-9]` token, suitable for identifiers and invite codes.
pub fn alphanumeric_token(len: usize) -> String {
    token(len, ALPHANUMERIC)
}

/// Random decimal-digit token, suitable for one-time confirmation codes.
pub fn numeric_token(len: usize) -> String {
    token(len, DIGITS)
}
