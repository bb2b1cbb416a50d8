//! Thin wrappers over the digest primitives. These are kept apart from
//! credential records and sealed payloads so callers who only need a checksum
//! never touch the password or encryption paths by accident.

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Digest algorithms selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl FromStr for DigestAlgorithm {
    type Err = DigestError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            other => Err(DigestError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        };
        f.write_str(name)
    }
}

/// 32-character hex MD5 digest.
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// 40-character hex SHA-1 digest.
pub fn sha1_hex(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}

/// 64-character hex SHA-256 digest.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Digest of `data` under a caller-selected algorithm, as lowercase hex.
pub fn digest_hex(algorithm: DigestAlgorithm, data: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Md5 => md5_hex(data),
        DigestAlgorithm::Sha1 => sha1_hex(data),
        DigestAlgorithm::Sha256 => sha256_hex(data),
    }
}
