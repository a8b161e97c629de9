//! Domain models and business logic for the replacement engine.
//!
//! This module contains the leaf algorithms with no file-system side
//! effects: first-line password extraction, random secret generation, and
//! date-based default output naming.

pub mod credentials;
pub mod naming;
pub mod secret;

pub use credentials::{FirstLinePasswords, PasswordPatternExtractor};
pub use naming::default_output_name;
pub use secret::{CharacterClasses, SecretGenerator};
