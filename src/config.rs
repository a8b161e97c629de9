//! Job configuration for a single processing session.
//!
//! A [`JobConfig`] is created fresh per session, filled in through validated
//! setters, then passed by reference into the processing service. It is not
//! meant to be reused across sessions and carries no internal synchronization.

use std::path::{Path, PathBuf};

use crate::error::{ReplacerError, ReplacerResult};

/// Default length for generated secrets.
pub const DEFAULT_SECRET_LENGTH: usize = 10;

/// Validated mutable configuration for one processing session.
#[derive(Debug, Clone)]
pub struct JobConfig {
    source_path: Option<PathBuf>,
    find_text: String,
    replace_text: String,
    output_name: String,
    secret_length: usize,
}

impl JobConfig {
    /// Creates an empty configuration with the default secret length.
    pub fn new() -> Self {
        Self {
            source_path: None,
            find_text: String::new(),
            replace_text: String::new(),
            output_name: String::new(),
            secret_length: DEFAULT_SECRET_LENGTH,
        }
    }

    /// Sets the source file path.
    ///
    /// Fails with [`ReplacerError::NotFound`] if the path does not exist on
    /// disk; the previously stored path is left untouched on failure.
    /// Existence is not re-checked later, so a file deleted between set and
    /// process surfaces as an IO error at process time.
    pub fn set_source(&mut self, path: impl AsRef<Path>) -> ReplacerResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ReplacerError::NotFound {
                path: path.to_path_buf(),
            });
        }
        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Sets the find and replace text, verbatim. Empty strings are allowed.
    pub fn set_find_replace(&mut self, find: impl Into<String>, replace: impl Into<String>) {
        self.find_text = find.into();
        self.replace_text = replace.into();
    }

    /// Sets the output file name, verbatim.
    pub fn set_output_name(&mut self, name: impl Into<String>) {
        self.output_name = name.into();
    }

    /// Sets the length used for generated secrets.
    ///
    /// Fails with [`ReplacerError::InvalidInput`] for a zero length.
    pub fn set_secret_length(&mut self, length: usize) -> ReplacerResult<()> {
        if length == 0 {
            return Err(ReplacerError::invalid_input(
                "secret_length",
                "Length must be a positive number",
            ));
        }
        self.secret_length = length;
        Ok(())
    }

    /// Returns the configured source path, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns the text to search for.
    pub fn find_text(&self) -> &str {
        &self.find_text
    }

    /// Returns the replacement text.
    pub fn replace_text(&self) -> &str {
        &self.replace_text
    }

    /// Returns the configured output file name (empty if unset).
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Returns the configured secret length.
    pub fn secret_length(&self) -> usize {
        self.secret_length
    }

    /// Returns a human-readable summary of the current configuration,
    /// suitable for verbose output and diagnostics.
    pub fn summary(&self) -> String {
        format!(
            "source: {}, find: {:?}, replace: {:?}, output: {:?}, secret length: {}",
            self.source_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unset>".to_string()),
            self.find_text,
            self.replace_text,
            self.output_name,
            self.secret_length
        )
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JobConfig::new();
        assert!(config.source_path().is_none());
        assert_eq!(config.output_name(), "");
        assert_eq!(config.secret_length(), DEFAULT_SECRET_LENGTH);
    }

    #[test]
    fn test_set_source_missing_file_fails() {
        let mut config = JobConfig::new();
        let result = config.set_source("/definitely/not/here.txt");
        assert!(matches!(result, Err(ReplacerError::NotFound { .. })));
        assert!(config.source_path().is_none());
    }

    #[test]
    fn test_set_source_failure_keeps_previous_path() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let mut config = JobConfig::new();
        config.set_source(temp.path()).unwrap();

        let result = config.set_source("/definitely/not/here.txt");
        assert!(result.is_err());
        assert_eq!(config.source_path(), Some(temp.path()));
    }

    #[test]
    fn test_set_secret_length_rejects_zero() {
        let mut config = JobConfig::new();
        let result = config.set_secret_length(0);
        assert!(matches!(result, Err(ReplacerError::InvalidInput { .. })));
        assert_eq!(config.secret_length(), DEFAULT_SECRET_LENGTH);
    }

    #[test]
    fn test_find_replace_allows_empty() {
        let mut config = JobConfig::new();
        config.set_find_replace("", "");
        assert_eq!(config.find_text(), "");
        assert_eq!(config.replace_text(), "");
    }

    #[test]
    fn test_summary_mentions_unset_source() {
        let config = JobConfig::new();
        assert!(config.summary().contains("<unset>"));
    }
}
