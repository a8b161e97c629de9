//! File replacement service layer.
//!
//! This module coordinates the two processing operations — plain
//! find/replace and credential rotation — handling precondition checks,
//! file I/O, and error mapping around the pure engine transformations.

pub mod engine;

use std::path::{Path, PathBuf};

use crate::config::JobConfig;
use crate::domain::{CharacterClasses, PasswordPatternExtractor, SecretGenerator};
use crate::error::{ReplacerError, ReplacerResult};

/// Stateless service coordinating file transformations.
///
/// Each operation performs one blocking read and one blocking write; the
/// source file is never mutated, and an existing output file is
/// overwritten.
#[derive(Debug, Clone, Default)]
pub struct ReplacementService {
    extractor: PasswordPatternExtractor,
    generator: SecretGenerator,
}

impl ReplacementService {
    /// Creates a new replacement service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes the configured source file with plain find/replace.
    ///
    /// Every non-overlapping literal occurrence of the configured find text
    /// is replaced; an empty find text passes the content through
    /// unchanged. Returns the path of the written output file.
    ///
    /// Fails with [`ReplacerError::InvalidInput`] if the source path or
    /// output name is unset (checked before any file I/O) and with
    /// [`ReplacerError::Io`] on read or write failure.
    pub fn process(&self, config: &JobConfig) -> ReplacerResult<PathBuf> {
        let (source, output) = Self::resolve_paths(config)?;

        let content = engine::read_source(source)?;
        let transformed = engine::substitute(&content, config.find_text(), config.replace_text());
        engine::write_output(&output, &transformed)?;

        Ok(output)
    }

    /// Processes the configured source file in credential-rotation mode.
    ///
    /// The first line must contain both `BY "..."` and `REPLACE "..."`
    /// patterns; the extracted values are shifted through the whole
    /// content: the old "new" password becomes the next secret, the old
    /// "current" password becomes the old "new" one.
    ///
    /// A `pre_generated` secret that is non-empty after trimming is used
    /// verbatim as the next secret; otherwise one is generated with the
    /// configured length and the supplied character classes.
    pub fn process_rotation(
        &self,
        config: &JobConfig,
        classes: CharacterClasses,
        pre_generated: Option<&str>,
    ) -> ReplacerResult<PathBuf> {
        let (source, output) = Self::resolve_paths(config)?;

        let content = engine::read_source(source)?;

        let passwords = self.extractor.extract(&content);
        let (old_new, old_current) = match (&passwords.new_password, &passwords.current_password) {
            (Some(new), Some(current)) => (new.as_str(), current.as_str()),
            _ => {
                return Err(ReplacerError::invalid_input(
                    "content",
                    "Could not find password patterns in first line. \
                     Expected 'BY \"password\"' and 'REPLACE \"password\"' patterns.",
                ))
            }
        };

        let next_secret = match pre_generated.map(str::trim).filter(|s| !s.is_empty()) {
            Some(secret) => secret.to_string(),
            None => self.generator.generate(config.secret_length(), classes)?,
        };

        let rotated = engine::rotate(&content, old_new, old_current, &next_secret);
        engine::write_output(&output, &rotated)?;

        Ok(output)
    }

    /// Validates that source and output are configured, before any file I/O.
    fn resolve_paths(config: &JobConfig) -> ReplacerResult<(&Path, PathBuf)> {
        let source = config.source_path().ok_or_else(|| {
            ReplacerError::invalid_input("source_path", "No source file specified")
        })?;

        if config.output_name().is_empty() {
            return Err(ReplacerError::invalid_input(
                "output_name",
                "No output file name specified",
            ));
        }

        let output = engine::output_path(source, config.output_name());
        Ok((source, output))
    }
}
