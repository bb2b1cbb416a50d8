//! Passphrase-sealed JSON payloads built on Argon2id and ChaCha20-Poly1305.
//! A payload is a single hex string carrying salt + nonce + ciphertext, so it
//! is self-contained: the only state is the string itself and the passphrase
//! supplied by the caller on each call.

use argon2::{Algorithm, Argon2, Params, Version};
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use zeroize::Zeroize;

/// Argon2id parameters shared with the rest of the crate's key derivation.
/// 19 MiB / 3 iterations / 1 lane keeps brute force expensive while staying
/// friendly to interactive callers.
const MEMORY_COST_KIB: u32 = 19 * 1024;
const TIME_COST: u32 = 3;
const PARALLELISM: u32 = 1;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const DERIVED_KEY_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum SealError {
    #[error("serialization failed: {0}")]
    SerializeFailed(String),
    #[error("deserialization failed: {0}")]
    DeserializeFailed(String),
    #[error("key derivation failed: {0}")]
    DerivationFailed(String),
    #[error("encryption failed: {0}")]
    EncryptFailed(String),
    #[error("decryption failed: {0}")]
    DecryptFailed(String),
}

/// Derives a 32-byte cipher key from a passphrase and a per-payload salt.
fn derive_key(passphrase: &str, salt: &[u8]) -> Result<[u8; DERIVED_KEY_LEN], SealError> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, Some(DERIVED_KEY_LEN))
        .map_err(|e| SealError::DerivationFailed(format!("{e}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; DERIVED_KEY_LEN];
    argon2
        .hash_password_into(passphrase.as_bytes(), salt, &mut key)
        .map_err(|e| SealError::DerivationFailed(format!("{e}")))?;
    Ok(key)
}

fn seal_bytes(plaintext: &[u8], passphrase: &str) -> Result<String, SealError> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let mut key = derive_key(passphrase, &salt)?;
    let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));
    key.zeroize();

    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| SealError::EncryptFailed(format!("{e}")))?;

    let mut payload = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    payload.extend_from_slice(&salt);
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&ciphertext);
    Ok(hex::encode(payload))
}

fn open_bytes(payload: &str, passphrase: &str) -> Result<Vec<u8>, SealError> {
    let raw = hex::decode(payload).map_err(|e| SealError::DecryptFailed(format!("{e}")))?;
    if raw.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
        return Err(SealError::DecryptFailed(
            "payload shorter than salt, nonce, and tag".to_string(),
        ));
    }

    let (salt, rest) = raw.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

    let mut key = derive_key(passphrase, salt)?;
    let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));
    key.zeroize();

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|e| SealError::DecryptFailed(format!("{e}")))
}

/// Seals a serializable value under `passphrase`.
///
/// The value is serialized to JSON, a fresh salt and nonce are drawn from OS
/// entropy, and the result is hex so it can travel through text-only
/// channels. Sealing the same value twice never yields the same payload.
pub fn seal_value<T: Serialize>(value: &T, passphrase: &str) -> Result<String, SealError> {
    let mut plaintext =
        serde_json::to_vec(value).map_err(|e| SealError::SerializeFailed(format!("{e}")))?;
    let sealed = seal_bytes(&plaintext, passphrase);
    plaintext.zeroize();
    sealed
}

/// Opens a sealed payload back into a structured value.
///
/// Hex digits are accepted in either case. Any tampering, truncation, or
/// wrong passphrase surfaces as `DecryptFailed` before a single plaintext
/// byte is released; plaintext that is not valid JSON surfaces as
/// `DeserializeFailed`.
pub fn open_value<T: DeserializeOwned>(payload: &str, passphrase: &str) -> Result<T, SealError> {
    let mut plaintext = open_bytes(payload, passphrase)?;
    let parsed = serde_json::from_slice(&plaintext)
        .map_err(|e| SealError::DeserializeFailed(format!("{e}")));
    plaintext.zeroize();
    parsed
}

#[cfg(test)]
mod tests {
    use super::{open_bytes, open_value, seal_bytes, seal_value, SealError};
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    #[test]
    fn round_trips_structured_values() {
        let value = json!({"user": "alice", "id": 42});
        let payload = seal_value(&value, "passphrase").expect("sealing should succeed");
        let reopened: Value = open_value(&payload, "passphrase").expect("opening should succeed");
        assert_eq!(reopened, value);
    }

    #[test]
    fn round_trips_typed_structs() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Session {
            user: String,
            id: u64,
            admin: bool,
        }

        let session = Session {
            user: "alice".to_string(),
            id: 42,
            admin: false,
        };
        let payload = seal_value(&session, "pa55phrase").expect("sealing should succeed");
        let reopened: Session = open_value(&payload, "pa55phrase").expect("opening should succeed");
        assert_eq!(reopened, session);
    }

    #[test]
    fn rejects_wrong_passphrase() {
        let payload = seal_value(&json!(["a", "b"]), "first").expect("sealing should succeed");
        let err = open_value::<Value>(&payload, "second").unwrap_err();
        assert!(matches!(err, SealError::DecryptFailed(_)));
    }

    #[test]
    fn detects_single_character_tampering() {
        let payload = seal_value(&json!({"k": true}), "passphrase").expect("sealing should succeed");
        let mut tampered: Vec<char> = payload.chars().collect();
        let last = tampered.len() - 1;
        tampered[last] = if tampered[last] == '0' { '1' } else { '0' };
        let tampered: String = tampered.into_iter().collect();

        let err = open_value::<Value>(&tampered, "passphrase").unwrap_err();
        assert!(matches!(err, SealError::DecryptFailed(_)));
    }

    #[test]
    fn rejects_truncated_and_non_hex_payloads() {
        let err = open_value::<Value>("00ff00", "passphrase").unwrap_err();
        assert!(matches!(err, SealError::DecryptFailed(_)));

        let err = open_value::<Value>("not hex at all", "passphrase").unwrap_err();
        assert!(matches!(err, SealError::DecryptFailed(_)));
    }

    #[test]
    fn payload_hex_case_is_insignificant() {
        let payload = seal_value(&json!(7), "passphrase").expect("sealing should succeed");
        let reopened: Value =
            open_value(&payload.to_uppercase(), "passphrase").expect("opening should succeed");
        assert_eq!(reopened, json!(7));
    }

    #[test]
    fn repeated_seals_produce_distinct_payloads() {
        let first = seal_value(&json!("same"), "passphrase").expect("sealing should succeed");
        let second = seal_value(&json!("same"), "passphrase").expect("sealing should succeed");
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_unserializable_shapes() {
        let mut map = HashMap::new();
        map.insert((1u8, 2u8), "tuple keys have no JSON spelling");
        let err = seal_value(&map, "passphrase").unwrap_err();
        assert!(matches!(err, SealError::SerializeFailed(_)));
    }

    #[test]
    fn surfaces_invalid_plaintext_as_deserialize_failure() {
        let payload = seal_bytes(b"not json", "passphrase").expect("sealing should succeed");
        assert_eq!(
            open_bytes(&payload, "passphrase").expect("opening should succeed"),
            b"not json"
        );
        let err = open_value::<Value>(&payload, "passphrase").unwrap_err();
        assert!(matches!(err, SealError::DeserializeFailed(_)));
    }
}
