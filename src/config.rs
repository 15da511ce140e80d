//! Keyproof configuration.

/// Configuration for license validation.
///
/// This struct contains the product-specific settings needed to open and
/// validate license blobs for one vendor.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Human-readable label of the license provider (e.g., "Acme Tools").
    /// Written to the result sink on successful validation.
    pub provider_label: &'static str,

    /// Vendor Ed25519 verifying key (hex-encoded, 64 characters).
    /// SECURITY: This should be hard-coded in your application, not from environment.
    pub verify_key_hex: &'static str,
}

impl ValidatorConfig {
    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), crate::LicenseError> {
        if self.provider_label.is_empty() {
            return Err(crate::LicenseError::Config(
                "provider_label cannot be empty".to_string(),
            ));
        }
        if self.verify_key_hex.len() != 64 {
            return Err(crate::LicenseError::Config(format!(
                "verify_key_hex must be 64 hex characters, got {}",
                self.verify_key_hex.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LicenseError;

    #[test]
    fn valid_config_passes() {
        let config = ValidatorConfig {
            provider_label: "Acme Tools",
            verify_key_hex: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_provider_label_rejected() {
        let config = ValidatorConfig {
            provider_label: "",
            verify_key_hex: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        };
        assert!(matches!(config.validate(), Err(LicenseError::Config(_))));
    }

    #[test]
    fn short_verify_key_rejected() {
        let config = ValidatorConfig {
            provider_label: "Acme Tools",
            verify_key_hex: "d75a",
        };
        assert!(matches!(config.validate(), Err(LicenseError::Config(_))));
    }
}
