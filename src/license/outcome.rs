//! Validation outcome type.
//!
//! Outcomes are returned by value and carried as data; callers branch on
//! the variant instead of catching typed errors. The `decrypted` tag on
//! `Invalid` records whether the blob opened correctly before the check
//! failed, which is what decides fallback to another license source.

use crate::license::record::LicenseRecord;
use crate::LicenseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of validating one license blob against one identity claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// The license opened, parsed, and passed every check.
    Valid {
        /// Parsed license fields.
        record: LicenseRecord,
        /// End of the validity window.
        expires_at: DateTime<Utc>,
    },

    /// The license was rejected.
    Invalid {
        /// Human-readable rejection reason.
        reason: String,
        /// Whether the blob opened correctly. `true` means the license
        /// positively identified itself and no other source should be
        /// tried; `false` means the blob itself was unusable.
        decrypted: bool,
    },
}

impl ValidationOutcome {
    /// Whether the license passed every check.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Whether this outcome ends a source chain.
    ///
    /// `Valid` and `Invalid { decrypted: true }` are terminal: the blob
    /// opened correctly, so trying to open a different blob makes no sense.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Valid { .. } => true,
            Self::Invalid { decrypted, .. } => *decrypted,
        }
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { reason, .. } => Some(reason),
        }
    }

    /// Build an `Invalid { decrypted: false }` outcome from an open/parse
    /// failure.
    pub(crate) fn rejected(err: LicenseError) -> Self {
        Self::Invalid {
            reason: err.to_string(),
            decrypted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_decrypted_is_terminal() {
        let outcome = ValidationOutcome::Invalid {
            reason: "expired".to_string(),
            decrypted: true,
        };
        assert!(outcome.is_terminal());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.reason(), Some("expired"));
    }

    #[test]
    fn invalid_undecrypted_is_not_terminal() {
        let outcome = ValidationOutcome::rejected(LicenseError::Decrypt("bad".to_string()));
        assert!(!outcome.is_terminal());
        assert!(outcome.reason().unwrap().contains("bad"));
    }
}
