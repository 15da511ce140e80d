//! License sources: where blob/identity pairs come from.
//!
//! The validator is agnostic to where a license lives. Hosts hand it an
//! ordered list of named sources; the chain stops at the first source whose
//! blob opens correctly (see `LicenseValidator::validate_source_chain`).

use crate::LicenseError;
use std::fs;
use std::path::PathBuf;

/// A blob/identity pair produced by a source.
#[derive(Debug, Clone)]
pub struct LicenseInput {
    /// Encrypted license blob as stored; normalized by the validator.
    pub blob: String,
    /// Claimed e-mail or username.
    pub identity: String,
}

/// A named provider of license material.
pub trait LicenseSource: Send + Sync {
    /// Stable name for logs and error messages.
    fn name(&self) -> &str;

    /// Load the blob/identity pair.
    ///
    /// # Errors
    /// Returns [`LicenseError::SourceUnavailable`] when the source has no
    /// usable contents (missing file, empty value). The chain skips to the
    /// next source on this error.
    fn load(&self) -> Result<LicenseInput, LicenseError>;
}

/// License source backed by a pair of files: the blob in one, the claimed
/// identity in the other.
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    license_path: PathBuf,
    identity_path: PathBuf,
}

impl FileSource {
    /// Create a file source with explicit paths.
    pub fn new(
        name: impl Into<String>,
        license_path: impl Into<PathBuf>,
        identity_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            license_path: license_path.into(),
            identity_path: identity_path.into(),
        }
    }

    /// Persist a newly entered license.
    ///
    /// Both files are written via temp file + rename so a crash mid-write
    /// never leaves a half-written license behind.
    pub fn store(&self, blob: &str, identity: &str) -> Result<(), LicenseError> {
        self.write_atomic(&self.license_path, blob)?;
        self.write_atomic(&self.identity_path, identity)
    }

    fn write_atomic(&self, target: &PathBuf, contents: &str) -> Result<(), LicenseError> {
        let temp = target.with_extension("tmp");

        fs::write(&temp, contents).map_err(|e| self.unavailable(format!("write failed: {}", e)))?;
        fs::rename(&temp, target).map_err(|e| self.unavailable(format!("rename failed: {}", e)))
    }

    fn read(&self, path: &PathBuf) -> Result<String, LicenseError> {
        fs::read_to_string(path)
            .map_err(|e| self.unavailable(format!("{}: {}", path.display(), e)))
    }

    fn unavailable(&self, detail: String) -> LicenseError {
        LicenseError::SourceUnavailable {
            name: self.name.clone(),
            detail,
        }
    }
}

impl LicenseSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<LicenseInput, LicenseError> {
        let blob = self.read(&self.license_path)?;
        let identity = self.read(&self.identity_path)?.trim().to_string();

        if blob.trim().is_empty() || identity.is_empty() {
            return Err(self.unavailable("license or identity file is empty".to_string()));
        }

        Ok(LicenseInput { blob, identity })
    }
}

/// License source holding its pair in memory.
///
/// Used when the host already read the values from elsewhere (a preference
/// store, a dialog field) and the core should stay agnostic to that.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    input: LicenseInput,
}

impl StaticSource {
    /// Create a static source from already-loaded values.
    pub fn new(name: impl Into<String>, blob: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: LicenseInput {
                blob: blob.into(),
                identity: identity.into(),
            },
        }
    }
}

impl LicenseSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<LicenseInput, LicenseError> {
        if self.input.blob.trim().is_empty() || self.input.identity.trim().is_empty() {
            return Err(LicenseError::SourceUnavailable {
                name: self.name.clone(),
                detail: "no license contents".to_string(),
            });
        }
        Ok(self.input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_source_roundtrip() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(
            "install",
            dir.path().join("license"),
            dir.path().join("license_email"),
        );

        source.store("BLOB-TEXT", "ann@example.com").unwrap();

        let input = source.load().unwrap();
        assert_eq!(input.blob, "BLOB-TEXT");
        assert_eq!(input.identity, "ann@example.com");
    }

    #[test]
    fn file_source_trims_identity() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(
            "install",
            dir.path().join("license"),
            dir.path().join("license_email"),
        );

        source.store("BLOB-TEXT", "  ann@example.com\n").unwrap();
        assert_eq!(source.load().unwrap().identity, "ann@example.com");
    }

    #[test]
    fn file_source_missing_files_unavailable() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(
            "install",
            dir.path().join("nope"),
            dir.path().join("nope_email"),
        );

        let err = source.load().unwrap_err();
        assert!(matches!(err, LicenseError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("install"));
    }

    #[test]
    fn file_source_empty_contents_unavailable() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(
            "install",
            dir.path().join("license"),
            dir.path().join("license_email"),
        );

        source.store("", "ann@example.com").unwrap();
        assert!(matches!(
            source.load(),
            Err(LicenseError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn static_source_loads_contents() {
        let source = StaticSource::new("preferences", "BLOB", "ann@example.com");
        let input = source.load().unwrap();
        assert_eq!(input.blob, "BLOB");
        assert_eq!(input.identity, "ann@example.com");
    }

    #[test]
    fn static_source_empty_is_unavailable() {
        let source = StaticSource::new("preferences", "", "ann@example.com");
        assert!(matches!(
            source.load(),
            Err(LicenseError::SourceUnavailable { .. })
        ));
    }
}
