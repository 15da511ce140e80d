//! Strict schema parse of the license payload.
//!
//! The payload is properties text: newline-delimited `key=value` pairs.
//! Five keys are required (`e-mail`, `name`, `time`, `licenseType`, `devs`);
//! unknown keys are ignored. The parse is all-or-nothing: a record is only
//! constructed when every required field is present, non-empty, and typed.

use crate::LicenseError;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const KEY_EMAIL: &str = "e-mail";
const KEY_NAME: &str = "name";
const KEY_TIME: &str = "time";
const KEY_LICENSE_TYPE: &str = "licenseType";
const KEY_DEVS: &str = "devs";

/// Parsed license fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// E-mail address the license was generated for.
    pub email: String,

    /// Display name of the license holder.
    pub name: String,

    /// Issue time (parsed from epoch milliseconds in the payload).
    pub issued_at: DateTime<Utc>,

    /// License type label (e.g., "pro").
    pub license_type: String,

    /// Number of developers the license covers.
    pub max_developers: u32,
}

impl LicenseRecord {
    /// Parse a decoded payload into a record.
    ///
    /// # Errors
    /// Returns [`LicenseError::Malformed`] when a required key is absent or
    /// empty, when `time` or `devs` does not parse as an integer, when the
    /// issue time falls outside the representable range, or when a
    /// non-comment line lacks a `=` separator.
    pub fn parse(plaintext: &str) -> Result<Self, LicenseError> {
        let fields = parse_properties(plaintext)?;

        let email = required(&fields, KEY_EMAIL)?;
        let name = required(&fields, KEY_NAME)?;
        let time = required(&fields, KEY_TIME)?;
        let license_type = required(&fields, KEY_LICENSE_TYPE)?;
        let devs = required(&fields, KEY_DEVS)?;

        let millis: i64 = time.parse().map_err(|_| {
            LicenseError::Malformed(format!("field '{}' is not an integer: {}", KEY_TIME, time))
        })?;
        let issued_at = Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| {
                LicenseError::Malformed(format!("issue time out of range: {}", millis))
            })?;

        let max_developers: u32 = devs.parse().map_err(|_| {
            LicenseError::Malformed(format!("field '{}' is not an integer: {}", KEY_DEVS, devs))
        })?;

        Ok(Self {
            email,
            name,
            issued_at,
            license_type,
            max_developers,
        })
    }

    /// Issue time as epoch milliseconds (how it appears in the payload).
    pub fn issued_at_millis(&self) -> i64 {
        self.issued_at.timestamp_millis()
    }
}

/// Split properties text into key/value pairs.
///
/// Blank lines and `#`/`!` comment lines are skipped.
fn parse_properties(plaintext: &str) -> Result<HashMap<String, String>, LicenseError> {
    let mut fields = HashMap::new();

    for line in plaintext.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| {
            LicenseError::Malformed("line without '=' separator".to_string())
        })?;
        fields.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(fields)
}

fn required(fields: &HashMap<String, String>, key: &str) -> Result<String, LicenseError> {
    match fields.get(key) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(LicenseError::Malformed(format!(
            "required field '{}' is missing or empty",
            key
        ))),
    }
}
