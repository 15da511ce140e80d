//! License Validator - the main public API for keyproof.
//!
//! The `LicenseValidator` runs the full pipeline in strict order: open the
//! sealed blob, parse the payload into a record, then check identity and
//! expiration. Failures in the first two steps become
//! `Invalid { decrypted: false }`; the checks report their own tag. Only
//! corrupt key material escapes as `Err`.

use crate::clock::{Clock, SystemClock};
use crate::config::ValidatorConfig;
use crate::crypto::{envelope, keyring::Keyring};
use crate::license::{outcome::ValidationOutcome, record::LicenseRecord, validity};
use crate::sink::{store_validated, ResultSink};
use crate::source::LicenseSource;
use crate::LicenseError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Rejection reason when every source in a chain was exhausted.
const NO_SUITABLE_LICENSE: &str = "could not find a suitable license";

/// Main license validator.
///
/// Create one instance per application and reuse it for all checks; the
/// verifying key is decoded once, lazily, on first use, and `validate` is
/// safe to call from multiple threads.
pub struct LicenseValidator {
    config: ValidatorConfig,
    keyring: Keyring,
    clock: Arc<dyn Clock>,
}

impl LicenseValidator {
    /// Create a new validator with the given configuration.
    ///
    /// Uses the system clock for expiration checks.
    ///
    /// # Errors
    /// Returns an error if configuration validation fails.
    pub fn new(config: ValidatorConfig) -> Result<Self, LicenseError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a validator with an injected clock.
    ///
    /// The clock is an external collaborator so hosts and tests can pin
    /// "now" instead of reading the system clock.
    pub fn with_clock(config: ValidatorConfig, clock: Arc<dyn Clock>) -> Result<Self, LicenseError> {
        config.validate()?;
        let keyring = Keyring::new(config.verify_key_hex);

        Ok(Self {
            config,
            keyring,
            clock,
        })
    }

    /// Validate one license blob against one identity claim.
    ///
    /// The blob is normalized first: any whitespace embedded by transport
    /// or storage is stripped so the envelope only ever sees canonical
    /// base64.
    ///
    /// # Errors
    /// Only [`LicenseError::KeyMaterial`] aborts the call; every expected
    /// validation failure is returned as an `Invalid` outcome.
    pub fn validate(
        &self,
        blob: &str,
        claimed_identity: &str,
    ) -> Result<ValidationOutcome, LicenseError> {
        let canonical: String = blob.chars().filter(|c| !c.is_whitespace()).collect();

        if canonical.is_empty() {
            return Ok(ValidationOutcome::Invalid {
                reason: "no license text provided".to_string(),
                decrypted: false,
            });
        }

        debug!(blob_len = canonical.len(), "validating license blob");

        let key = self.keyring.verifying_key()?;

        let plaintext = match envelope::open(&canonical, key) {
            Ok(plaintext) => plaintext,
            Err(err) => return Ok(ValidationOutcome::rejected(err)),
        };

        let record = match LicenseRecord::parse(&plaintext) {
            Ok(record) => record,
            Err(err) => return Ok(ValidationOutcome::rejected(err)),
        };

        let outcome = validity::check(&record, claimed_identity, self.clock.now_utc());
        if let Some(reason) = outcome.reason() {
            warn!(reason, "license rejected");
        }
        Ok(outcome)
    }

    /// Try an ordered list of named license sources.
    ///
    /// Sources are consulted in order. A source that fails to load is
    /// skipped. The chain stops at the first terminal outcome: `Valid`, or
    /// `Invalid` from a blob that opened correctly - such a license
    /// positively identified itself, so later sources are not tried. When
    /// every source is exhausted, the last rejection reason (or a generic
    /// message) is returned with `decrypted: false`.
    ///
    /// # Errors
    /// Only [`LicenseError::KeyMaterial`] aborts the chain.
    pub fn validate_source_chain(
        &self,
        sources: &[&dyn LicenseSource],
    ) -> Result<ValidationOutcome, LicenseError> {
        let mut last_reason: Option<String> = None;

        for source in sources {
            let input = match source.load() {
                Ok(input) => input,
                Err(err) => {
                    debug!(source = source.name(), %err, "license source skipped");
                    continue;
                }
            };

            let outcome = self.validate(&input.blob, &input.identity)?;
            if outcome.is_terminal() {
                debug!(source = source.name(), "license source produced a terminal outcome");
                return Ok(outcome);
            }

            last_reason = outcome.reason().map(str::to_string);
        }

        Ok(ValidationOutcome::Invalid {
            reason: last_reason.unwrap_or_else(|| NO_SUITABLE_LICENSE.to_string()),
            decrypted: false,
        })
    }

    /// Validate and, on success, write the display fields into a sink.
    ///
    /// The sink is untouched unless the outcome is `Valid`. With
    /// `hide_details`, the identity and license-text keys receive a
    /// redacted display string instead of the raw values.
    ///
    /// # Errors
    /// Only [`LicenseError::KeyMaterial`] aborts the call.
    pub fn validate_and_store(
        &self,
        blob: &str,
        claimed_identity: &str,
        sink: &mut dyn ResultSink,
        hide_details: bool,
    ) -> Result<ValidationOutcome, LicenseError> {
        let outcome = self.validate(blob, claimed_identity)?;

        if let ValidationOutcome::Valid { ref record, .. } = outcome {
            store_validated(sink, record, self.config.provider_label, hide_details);
        }

        Ok(outcome)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}
