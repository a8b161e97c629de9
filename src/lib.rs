//! File find/replace and credential-rotation library.
//!
//! This library takes a flat text file, applies a textual substitution, and
//! saves the result under a new name beside the source. Two modes are
//! supported: plain literal find/replace, and a credential-rotation mode
//! that parses a first-line `BY "..." REPLACE "..."` pattern and rotates
//! the embedded database passwords consistently through the file.
//!
//! # Architecture
//!
//! - [`config`]: validated per-session job configuration
//! - [`domain`]: leaf business logic (pattern extraction, secret
//!   generation, date-based naming)
//! - [`replacement`]: the processing service and pure engine
//! - [`error`]: comprehensive error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use replacer::{JobConfig, ReplacementService};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = JobConfig::new();
//! config.set_source("input.txt")?;
//! config.set_find_replace("staging", "production");
//! config.set_output_name("input_updated.txt");
//!
//! let service = ReplacementService::new();
//! let output = service.process(&config)?;
//! println!("wrote {}", output.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Credential Rotation
//!
//! ```no_run
//! use replacer::{CharacterClasses, JobConfig, ReplacementService};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = JobConfig::new();
//! config.set_source("alter_user.sql")?;
//! config.set_output_name("alter_user_rotated.sql");
//! config.set_secret_length(16)?;
//!
//! let service = ReplacementService::new();
//! service.process_rotation(&config, CharacterClasses::all(), None)?;
//! # Ok(())
//! # }
//! ```

// Public API
pub mod config;
pub mod domain;
pub mod error;
pub mod replacement;

// Re-exports for convenient access
pub use config::JobConfig;
pub use domain::{
    default_output_name, CharacterClasses, FirstLinePasswords, PasswordPatternExtractor,
    SecretGenerator,
};
pub use error::{ReplacerError, ReplacerResult};
pub use replacement::ReplacementService;
