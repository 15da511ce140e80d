//! Sealed license blob envelope.
//!
//! A license blob is a base64 envelope:
//!
//! ```text
//! base64( epoch:u8 || payload || ed25519-signature[64] )
//! ```
//!
//! The signature covers `epoch || payload` and is checked against the vendor
//! verifying key. Opening is deterministic and side-effect free; the caller
//! must hand in the blob in canonical form (no embedded whitespace).

use crate::LicenseError;
use base64::{engine::general_purpose::STANDARD, Engine};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

/// Key epoch currently issued by the vendor.
pub const KEY_EPOCH: u8 = 1;

/// Length of the trailing Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

// Epoch byte + signature + at least one payload byte.
const MIN_ENVELOPE_LEN: usize = 1 + SIGNATURE_LEN + 1;

/// Open a sealed blob and return the authenticated plaintext payload.
///
/// # Errors
/// Returns [`LicenseError::Decrypt`] when the blob is not canonical base64,
/// is too short, carries an unknown key epoch, fails signature verification,
/// or holds a non-UTF-8 payload.
pub fn open(blob: &str, key: &VerifyingKey) -> Result<String, LicenseError> {
    let bytes = STANDARD
        .decode(blob)
        .map_err(|e| LicenseError::Decrypt(format!("invalid base64: {}", e)))?;

    if bytes.len() < MIN_ENVELOPE_LEN {
        return Err(LicenseError::Decrypt("blob too short".to_string()));
    }

    if bytes[0] != KEY_EPOCH {
        return Err(LicenseError::Decrypt(format!(
            "unsupported key epoch: {}",
            bytes[0]
        )));
    }

    let split = bytes.len() - SIGNATURE_LEN;
    let signed = &bytes[..split];

    let sig_array: [u8; SIGNATURE_LEN] = bytes[split..]
        .try_into()
        .map_err(|_| LicenseError::Decrypt("signature truncated".to_string()))?;
    let signature = Signature::from_bytes(&sig_array);

    key.verify(signed, &signature)
        .map_err(|_| LicenseError::Decrypt("integrity check failed".to_string()))?;

    String::from_utf8(signed[1..].to_vec())
        .map_err(|_| LicenseError::Decrypt("payload is not valid UTF-8".to_string()))
}

/// Seal a plaintext payload into a blob (issuance side).
///
/// This is the inverse of [`open`] and exists for vendor tooling and tests;
/// the validating side only ever holds the verifying key.
pub fn seal(plaintext: &str, signing_key: &SigningKey) -> String {
    let mut signed = Vec::with_capacity(1 + plaintext.len());
    signed.push(KEY_EPOCH);
    signed.extend_from_slice(plaintext.as_bytes());

    let signature = signing_key.sign(&signed);
    signed.extend_from_slice(&signature.to_bytes());

    STANDARD.encode(signed)
}
