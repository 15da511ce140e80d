//! Identity and expiration checks.
//!
//! A license is accepted for a fixed window of one calendar year from its
//! issue time. The window end is computed with calendar arithmetic
//! (`checked_add_months`), not a fixed 365-day offset: a license issued on
//! Feb 29 expires on Feb 28 of the following year, because chrono clamps to
//! the last day of the shorter month.

use crate::license::outcome::ValidationOutcome;
use crate::license::record::LicenseRecord;
use chrono::{DateTime, Months, Utc};

/// Validity window after issuance, in calendar months.
pub const VALIDITY_MONTHS: u32 = 12;

/// Compute the end of the validity window for an issue time.
pub fn expires_at(issued_at: DateTime<Utc>) -> DateTime<Utc> {
    // None only near the end of chrono's representable range; treat such
    // licenses as never expiring rather than failing the call.
    issued_at
        .checked_add_months(Months::new(VALIDITY_MONTHS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Check a parsed record against the claimed identity and the clock.
///
/// Checks run in order and short-circuit. Both rejections carry
/// `decrypted: true`: the blob opened correctly, so the caller must not
/// fall back to another license source after either of them.
pub fn check(
    record: &LicenseRecord,
    claimed_identity: &str,
    now: DateTime<Utc>,
) -> ValidationOutcome {
    // 1. Identity: case-insensitive match against the licensed e-mail.
    if claimed_identity.to_lowercase() != record.email.to_lowercase() {
        return ValidationOutcome::Invalid {
            reason: "the e-mail specified differs from the e-mail this license was generated for"
                .to_string(),
            decrypted: true,
        };
    }

    // 2. Expiration: strictly after the window end rejects; the boundary
    //    instant itself is still accepted.
    let expires_at = expires_at(record.issued_at);
    if now > expires_at {
        return ValidationOutcome::Invalid {
            reason: format!("license expired at {}", expires_at.format("%Y-%m-%d")),
            decrypted: true,
        };
    }

    ValidationOutcome::Valid {
        record: record.clone(),
        expires_at,
    }
}
