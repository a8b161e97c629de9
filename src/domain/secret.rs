//! Random secret generation.
//!
//! Secrets are drawn from `rand::thread_rng`, a general-purpose random
//! source. This is a usability/rotation tool, not a security primitive; if
//! the rotation feature is ever repurposed for real credential management,
//! the source should be swapped for a CSPRNG as an explicit behavior change.

use rand::Rng;

use crate::error::{ReplacerError, ReplacerResult};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Character classes available for secret generation.
///
/// At least one class must be selected for any generation call. The
/// default selects all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    /// Include uppercase ASCII letters
    pub uppercase: bool,

    /// Include lowercase ASCII letters
    pub lowercase: bool,

    /// Include decimal digits
    pub digits: bool,
}

impl CharacterClasses {
    /// Selects all three character classes.
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
        }
    }

    /// Returns true if at least one class is selected.
    pub fn any_selected(&self) -> bool {
        self.uppercase || self.lowercase || self.digits
    }

    /// Builds the candidate alphabet as the union of the selected classes,
    /// in the fixed order uppercase, lowercase, digits.
    fn alphabet(&self) -> Vec<u8> {
        let mut chars = Vec::new();
        if self.uppercase {
            chars.extend_from_slice(UPPERCASE);
        }
        if self.lowercase {
            chars.extend_from_slice(LOWERCASE);
        }
        if self.digits {
            chars.extend_from_slice(DIGITS);
        }
        chars
    }
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self::all()
    }
}

/// Generates random secrets from selectable character classes.
#[derive(Debug, Clone, Default)]
pub struct SecretGenerator;

impl SecretGenerator {
    /// Creates a new secret generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a random string of exactly `length` characters.
    ///
    /// Each character is drawn independently and uniformly, with
    /// replacement, from the union of the selected classes; the output is
    /// not required to contain every selected class. Calls are independent
    /// and share no seed.
    ///
    /// Fails with [`ReplacerError::InvalidInput`] for a zero length or when
    /// no character class is selected.
    pub fn generate(&self, length: usize, classes: CharacterClasses) -> ReplacerResult<String> {
        if length == 0 {
            return Err(ReplacerError::invalid_input(
                "length",
                "Length must be a positive number",
            ));
        }

        let alphabet = classes.alphabet();
        if alphabet.is_empty() {
            return Err(ReplacerError::invalid_input(
                "character_classes",
                "At least one character type must be selected",
            ));
        }

        let mut rng = rand::thread_rng();
        let secret = (0..length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect();

        Ok(secret)
    }
}
