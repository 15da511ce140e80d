//! Cryptographic layer: vendor key material and the sealed blob envelope.

pub mod envelope;
pub mod keyring;
