//! # Keyproof
//!
//! **Offline validation for sealed product license blobs.**
//!
//! Keyproof opens an Ed25519-authenticated license envelope, parses its
//! properties payload into a fixed record, and checks the claimed identity
//! and a one-calendar-year validity window - entirely offline, with no
//! network calls and no host-UI dependency.
//!
//! ## Features
//!
//! - **Authenticated envelopes** — blobs carry an Ed25519 signature over a
//!   key-epoch byte and the payload; tampering and wrong-vendor blobs fail
//!   to open
//! - **Strict payload schema** — five required fields, rejected up front on
//!   any missing or untyped value
//! - **Tagged outcomes, not exceptions** — callers branch on
//!   [`ValidationOutcome`] data; only corrupt key material is a hard error
//! - **Source chains** — ordered, named license sources tried in sequence,
//!   stopping at the first blob that opens correctly
//! - **Injected clock** — expiration is checked against a [`Clock`] so
//!   hosts and tests control "now"
//!
//! ## Quickstart
//!
//! ```no_run
//! use keyproof::{LicenseValidator, ValidationOutcome, ValidatorConfig};
//!
//! fn main() -> Result<(), keyproof::LicenseError> {
//!     let config = ValidatorConfig {
//!         provider_label: "Acme Tools",
//!         verify_key_hex: "your-vendor-ed25519-verify-key-hex",
//!     };
//!
//!     let validator = LicenseValidator::new(config)?;
//!     match validator.validate("BASE64-LICENSE-BLOB", "ann@example.com")? {
//!         ValidationOutcome::Valid { record, expires_at } => {
//!             println!("licensed to {} until {}", record.name, expires_at.format("%Y-%m-%d"));
//!         }
//!         ValidationOutcome::Invalid { reason, .. } => {
//!             println!("rejected: {}", reason);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Fallback semantics
//!
//! `Invalid { decrypted: false }` means the blob itself was unusable
//! (malformed, wrong vendor, missing fields) and another license source may
//! be tried. `Invalid { decrypted: true }` means the blob opened correctly
//! and positively failed a check (wrong e-mail, expired); the outcome is
//! terminal and no other source should be consulted.
//!
//! Keyproof does **not** prevent binary patching or key extraction.
//! Client-side licensing can always be bypassed by a determined attacker
//! with access to the binary.

#![deny(warnings)]
#![deny(missing_docs)]

// Core modules
pub mod clock;
pub mod config;
pub mod errors;

// Crypto layer
pub mod crypto;

// License model and rules
pub mod license;

// Collaborator seams
pub mod sink;
pub mod source;

// Validator (main public API)
pub mod validator;

// Re-exports for public API
pub use clock::{Clock, SystemClock};
pub use config::ValidatorConfig;
pub use errors::LicenseError;
pub use license::outcome::ValidationOutcome;
pub use license::record::LicenseRecord;
pub use sink::{MemorySink, ResultSink};
pub use source::{FileSource, LicenseInput, LicenseSource, StaticSource};
pub use validator::LicenseValidator;

#[cfg(any(test, feature = "test-seams"))]
pub use clock::MockClock;
