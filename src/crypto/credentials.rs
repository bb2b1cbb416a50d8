//! Salted credential digest records in the portable `LEFT:DIGEST:RIGHT`
//! format. Records are recomputed and compared on every login attempt, never
//! decrypted, and verification fails closed on anything malformed.

use md5::{Digest, Md5};
use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;

/// Length of each salt fragment embedded in a record.
const SALT_FRAGMENT_LEN: usize = 2;
/// Bytes drawn from the OS entropy source for each new record.
const SEED_LEN: usize = 32;

/// MD5 of `left + plaintext + right`, uppercased to match the record format.
/// MD5 is pinned by the 32-digit field layout; records must stay verifiable
/// by every existing implementation of the scheme.
fn record_digest(left: &str, plaintext: &str, right: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(left.as_bytes());
    hasher.update(plaintext.as_bytes());
    hasher.update(right.as_bytes());
    hex::encode(hasher.finalize()).to_uppercase()
}

/// Issues a salted digest record for `plaintext`.
///
/// A fresh 32-character salt universe is derived from OS entropy per call, so
/// issuing the same plaintext twice yields different records that both
/// verify. The result is the three record fields joined by `:`.
pub fn issue(plaintext: &str) -> String {
    let mut seed = [0u8; SEED_LEN];
    OsRng.fill_bytes(&mut seed);
    let universe = hex::encode(Md5::digest(seed)).to_uppercase();

    let left = &universe[..SALT_FRAGMENT_LEN];
    let right = &universe[universe.len() - SALT_FRAGMENT_LEN..];
    let digest = record_digest(left, plaintext, right);
    [left, digest.as_str(), right].join(":")
}

/// Verifies `plaintext` against a stored record.
///
/// The record is case-insensitive on input and normalized to uppercase before
/// splitting. Returns `false` when fewer than three `:`-separated fields are
/// present or the recomputed digest differs; the digest comparison runs in
/// constant time so a mismatch position leaks nothing.
pub fn verify(plaintext: &str, record: &str) -> bool {
    let normalized = record.to_uppercase();
    let fields: Vec<&str> = normalized.split(':').collect();
    if fields.len() < 3 {
        return false;
    }

    let expected = record_digest(fields[0], plaintext, fields[2]);
    bool::from(expected.as_bytes().ct_eq(fields[1].as_bytes()))
}
