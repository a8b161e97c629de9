//! Common test utilities and helpers.
//!
//! Provides fixtures for creating source files in temporary directories
//! and shared assertions over produced output files.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A source file laid out in its own temporary directory.
///
/// The directory is kept alive for the duration of the test so that output
/// files written beside the source can be inspected.
pub struct SourceFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl SourceFixture {
    /// Writes `content` to a file named `name` in a fresh temp directory.
    pub fn new(name: &str, content: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join(name);
        fs::write(&path, content)?;
        Ok(Self { dir, path })
    }

    /// Path a sibling output file would land at.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Reads the original source content back.
    pub fn source_content(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Reads an output file, asserting it exists.
pub fn read_output(path: &Path) -> String {
    assert!(path.exists(), "expected output file at {}", path.display());
    fs::read_to_string(path).expect("output file should be valid UTF-8")
}

/// A rotation-style source: an ALTER USER first line plus body lines that
/// repeat both passwords.
pub fn rotation_content(new_pw: &str, current_pw: &str) -> String {
    format!(
        "ALTER USER app IDENTIFIED BY \"{new}\" REPLACE \"{cur}\";\n\
         -- connection string uses {new}\n\
         password={cur}\n\
         backup_password={new}\n",
        new = new_pw,
        cur = current_pw,
    )
}
