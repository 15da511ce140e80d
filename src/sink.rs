//! Result sink: where validated license fields end up.
//!
//! The core never reads back from the sink and only writes on success; a
//! failed validation leaves it untouched. Hosts typically wire this to a
//! preferences or settings store.

use crate::license::record::LicenseRecord;
use std::collections::HashMap;

/// Logical keys written on successful validation.
pub mod keys {
    /// Display name of the license holder.
    pub const USER_NAME: &str = "license.user.name";
    /// Issue time as epoch milliseconds.
    pub const ISSUED_AT: &str = "license.issued.at";
    /// License type label.
    pub const LICENSE_TYPE: &str = "license.type";
    /// Number of developers covered.
    pub const MAX_DEVELOPERS: &str = "license.developers";
    /// Provider label from the validator configuration.
    pub const PROVIDER: &str = "license.provider";
    /// Identity display value (redacted when details are hidden).
    pub const IDENTITY: &str = "license.identity";
    /// License display text (redacted when details are hidden).
    pub const LICENSE_TEXT: &str = "license.text";
}

/// Redaction prefix used when details are hidden.
const VALIDATED_FOR: &str = "Install validated for: ";

/// Abstract destination for validated, human-readable license fields.
pub trait ResultSink {
    /// Store one key/value pair.
    fn put(&mut self, key: &str, value: &str);
}

/// Write a validated record's display fields into a sink.
///
/// With `hide_details`, the identity and license-text keys receive
/// `"Install validated for: <name>"` instead of the raw values, so the raw
/// identity and blob never reach the display store.
pub fn store_validated(
    sink: &mut dyn ResultSink,
    record: &LicenseRecord,
    provider_label: &str,
    hide_details: bool,
) {
    sink.put(keys::USER_NAME, &record.name);
    sink.put(keys::ISSUED_AT, &record.issued_at_millis().to_string());
    sink.put(keys::LICENSE_TYPE, &record.license_type);
    sink.put(keys::MAX_DEVELOPERS, &record.max_developers.to_string());
    sink.put(keys::PROVIDER, provider_label);

    if hide_details {
        let redacted = format!("{}{}", VALIDATED_FOR, record.name);
        sink.put(keys::IDENTITY, &redacted);
        sink.put(keys::LICENSE_TEXT, &redacted);
    }
}

/// In-memory sink for hosts without a settings store, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    values: HashMap<String, String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a stored value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ResultSink for MemorySink {
    fn put(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_record() -> LicenseRecord {
        LicenseRecord {
            email: "a@b.com".to_string(),
            name: "Ann".to_string(),
            issued_at: Utc.timestamp_millis_opt(1_000_000_000_000).single().unwrap(),
            license_type: "pro".to_string(),
            max_developers: 5,
        }
    }

    #[test]
    fn stores_display_fields() {
        let mut sink = MemorySink::new();
        store_validated(&mut sink, &sample_record(), "Acme Tools", false);

        assert_eq!(sink.get(keys::USER_NAME), Some("Ann"));
        assert_eq!(sink.get(keys::ISSUED_AT), Some("1000000000000"));
        assert_eq!(sink.get(keys::LICENSE_TYPE), Some("pro"));
        assert_eq!(sink.get(keys::MAX_DEVELOPERS), Some("5"));
        assert_eq!(sink.get(keys::PROVIDER), Some("Acme Tools"));
        assert_eq!(sink.get(keys::IDENTITY), None);
        assert_eq!(sink.get(keys::LICENSE_TEXT), None);
    }

    #[test]
    fn hide_details_redacts_identity_and_text() {
        let mut sink = MemorySink::new();
        store_validated(&mut sink, &sample_record(), "Acme Tools", true);

        assert_eq!(sink.get(keys::IDENTITY), Some("Install validated for: Ann"));
        assert_eq!(
            sink.get(keys::LICENSE_TEXT),
            Some("Install validated for: Ann")
        );
    }
}
