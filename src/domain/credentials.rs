//! First-line password pattern extraction.
//!
//! Rotation files carry both credentials on their first line, typically an
//! `ALTER USER` statement of the form:
//!
//! ```text
//! ALTER USER app IDENTIFIED BY "newpass123" REPLACE "oldpass456";
//! ```
//!
//! The token after `BY` is the new password, the token after `REPLACE` the
//! current one. Only the first line is ever inspected; this is a deliberate
//! scope limiter, not a SQL parser.

use once_cell::sync::Lazy;
use regex::Regex;

/// Passwords extracted from the first line of file content.
///
/// Either side may be absent independently; rotation requires both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstLinePasswords {
    /// Quoted literal following `BY` (the "new" password)
    pub new_password: Option<String>,

    /// Quoted literal following `REPLACE` (the "current" password)
    pub current_password: Option<String>,
}

impl FirstLinePasswords {
    /// Returns a result with both sides absent.
    pub fn none() -> Self {
        Self {
            new_password: None,
            current_password: None,
        }
    }

    /// Returns true if both passwords were found.
    pub fn is_complete(&self) -> bool {
        self.new_password.is_some() && self.current_password.is_some()
    }
}

/// Extracts credential pairs from the first line of file content.
#[derive(Debug, Clone, Default)]
pub struct PasswordPatternExtractor;

impl PasswordPatternExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Pattern for the new password: `BY "..."`, case-insensitive.
    fn by_pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r#"(?i)BY\s+"([^"]+)""#).expect("Valid BY password regex"));
        &PATTERN
    }

    /// Pattern for the current password: `REPLACE "..."`, case-insensitive.
    fn replace_pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r#"(?i)REPLACE\s+"([^"]+)""#).expect("Valid REPLACE password regex")
        });
        &PATTERN
    }

    /// Extracts (new, current) passwords from the first line of `content`.
    ///
    /// Returns both as `None` for empty or whitespace-only content. The two
    /// searches are independent: a missing `BY` pattern does not prevent the
    /// `REPLACE` pattern from being found, and vice versa. Lines after the
    /// first are never inspected, even if they contain matching patterns.
    pub fn extract(&self, content: &str) -> FirstLinePasswords {
        if content.trim().is_empty() {
            return FirstLinePasswords::none();
        }

        // First line only: up to the first newline, or the whole content.
        let first_line = content.split('\n').next().unwrap_or(content);

        let capture = |re: &Regex| {
            re.captures(first_line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        };

        FirstLinePasswords {
            new_password: capture(Self::by_pattern()),
            current_password: capture(Self::replace_pattern()),
        }
    }
}
