//! Pure content transformations and whole-file I/O.
//!
//! Everything here operates on in-memory strings or performs one blocking
//! read/write; orchestration and precondition checks live in the service.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReplacerError, ReplacerResult};

/// Replaces every non-overlapping literal occurrence of `find` with
/// `replace`, scanning leftmost-first. An empty `find` passes the content
/// through unchanged regardless of `replace`.
pub fn substitute(content: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return content.to_string();
    }
    content.replace(find, replace)
}

/// Applies the three-way credential shift to `content`.
///
/// Two sequential whole-content substitutions, in this order:
/// 1. every `old_new` occurrence becomes `next_secret`
/// 2. every `old_current` occurrence becomes `old_new`
///
/// Step 1 must run first: if the two targets overlap as substrings of each
/// other, running step 2 first would also transform text that step 1 had
/// already rewritten.
pub fn rotate(content: &str, old_new: &str, old_current: &str, next_secret: &str) -> String {
    let content = content.replace(old_new, next_secret);
    content.replace(old_current, old_new)
}

/// Resolves the output path: the source's parent directory joined with the
/// output name. Output always lands beside the source file.
pub fn output_path(source: &Path, output_name: &str) -> PathBuf {
    source
        .parent()
        .map(|dir| dir.join(output_name))
        .unwrap_or_else(|| PathBuf::from(output_name))
}

/// Reads the source file as UTF-8 text.
///
/// Any failure, including invalid UTF-8, surfaces as [`ReplacerError::Io`].
pub fn read_source(path: &Path) -> ReplacerResult<String> {
    fs::read_to_string(path).map_err(|e| ReplacerError::io(path, e))
}

/// Writes the transformed content as UTF-8, overwriting an existing target.
pub fn write_output(path: &Path, content: &str) -> ReplacerResult<()> {
    fs::write(path, content).map_err(|e| ReplacerError::io(path, e))
}
