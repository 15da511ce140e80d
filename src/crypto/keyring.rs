//! Lazily-initialized vendor key material.
//!
//! The verifying key is decoded from its hex form at most once per
//! [`Keyring`], on first use, guarded by a one-time-initialization cell.
//! After initialization the key is never mutated; concurrent first use is
//! safe.

use crate::LicenseError;
use ed25519_dalek::VerifyingKey;
use once_cell::sync::OnceCell;

/// Holder for the vendor Ed25519 verifying key.
///
/// Decoding failures are reported as [`LicenseError::KeyMaterial`]: the key
/// is baked into the product, so a key that does not decode means a broken
/// deployment rather than a bad license.
#[derive(Debug)]
pub struct Keyring {
    key_hex: &'static str,
    key: OnceCell<VerifyingKey>,
}

impl Keyring {
    /// Create a keyring over a hex-encoded verifying key.
    ///
    /// No decoding happens here; the key is materialized on first use.
    pub const fn new(key_hex: &'static str) -> Self {
        Self {
            key_hex,
            key: OnceCell::new(),
        }
    }

    /// Get the decoded verifying key, decoding it on first call.
    pub fn verifying_key(&self) -> Result<&VerifyingKey, LicenseError> {
        self.key.get_or_try_init(|| decode_verify_key(self.key_hex))
    }
}

/// Decode a hex-encoded Ed25519 verifying key.
pub fn decode_verify_key(hex_key: &str) -> Result<VerifyingKey, LicenseError> {
    let bytes = hex::decode(hex_key)
        .map_err(|e| LicenseError::KeyMaterial(format!("invalid verify key hex: {}", e)))?;

    let key_array: [u8; 32] = bytes
        .try_into()
        .map_err(|_| LicenseError::KeyMaterial("verify key must be 32 bytes".to_string()))?;

    VerifyingKey::from_bytes(&key_array)
        .map_err(|e| LicenseError::KeyMaterial(format!("invalid Ed25519 verify key: {}", e)))
}
