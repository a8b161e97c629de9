//! File Replacement CLI Application.
//!
//! This binary provides a command-line interface for the replacer library,
//! supporting plain find/replace, credential rotation, and standalone
//! secret generation with proper error handling and user feedback.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use replacer::{default_output_name, CharacterClasses, JobConfig, ReplacementService};

/// File Replacement Tool
///
/// Apply a literal find/replace to a text file and save the result beside
/// the source. By default, performs plain replacement. Use the 'rotate'
/// subcommand for database credential rotation and 'generate' for
/// standalone secret generation.
#[derive(Parser)]
#[command(name = "replacer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input text file path
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file name (written beside the source; defaults to the source
    /// name with today's date inserted)
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,

    /// Text to search for (literal, not regex)
    #[arg(short, long, value_name = "TEXT")]
    find: Option<String>,

    /// Replacement text
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    replace: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate database passwords embedded in the file's first line
    Rotate {
        /// Input text file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name (defaults to the source name with today's date)
        #[arg(short, long, value_name = "NAME")]
        output: Option<String>,

        /// Length of the generated secret
        #[arg(short, long, default_value_t = 10)]
        length: usize,

        /// Include uppercase letters (selecting no class flag enables all)
        #[arg(long)]
        uppercase: bool,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Include decimal digits
        #[arg(long)]
        digits: bool,

        /// Use this secret instead of generating one
        #[arg(short, long, value_name = "SECRET")]
        secret: Option<String>,
    },

    /// Generate a random secret and print it to stdout
    Generate {
        /// Length of the generated secret
        #[arg(short, long, default_value_t = 10)]
        length: usize,

        /// Include uppercase letters (selecting no class flag enables all)
        #[arg(long)]
        uppercase: bool,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Include decimal digits
        #[arg(long)]
        digits: bool,
    },
}

/// Replacement command handler.
struct ReplacementHandler {
    service: ReplacementService,
    verbose: bool,
}

impl ReplacementHandler {
    fn new(verbose: bool) -> Self {
        Self {
            service: ReplacementService::new(),
            verbose,
        }
    }

    /// Builds a job configuration shared by both processing modes.
    fn build_config(
        &self,
        input: &Path,
        output: Option<&str>,
        length: Option<usize>,
    ) -> Result<JobConfig> {
        let mut config = JobConfig::new();
        config
            .set_source(input)
            .with_context(|| format!("Cannot use input file {}", input.display()))?;

        let output_name = match output {
            Some(name) => name.to_string(),
            None => default_output_name(config.source_path()),
        };
        config.set_output_name(output_name);

        if let Some(length) = length {
            config.set_secret_length(length)?;
        }

        if self.verbose {
            println!("Job: {}", config.summary());
        }

        Ok(config)
    }

    /// Executes a plain find/replace operation.
    fn replace(
        &self,
        input: &Path,
        output: Option<&str>,
        find: &str,
        replace: &str,
    ) -> Result<()> {
        let mut config = self.build_config(input, output, None)?;
        config.set_find_replace(find, replace);

        let output_path = self
            .service
            .process(&config)
            .with_context(|| "Replacement failed")?;

        println!("✓ Successfully processed → {}", output_path.display());
        Ok(())
    }

    /// Executes a credential rotation operation.
    fn rotate(
        &self,
        input: &Path,
        output: Option<&str>,
        length: usize,
        classes: CharacterClasses,
        secret: Option<&str>,
    ) -> Result<()> {
        let config = self.build_config(input, output, Some(length))?;

        let output_path = self
            .service
            .process_rotation(&config, classes, secret)
            .with_context(|| "Credential rotation failed")?;

        println!("✓ Credentials rotated → {}", output_path.display());
        Ok(())
    }
}

/// Resolves the character-class flags; selecting none means all three,
/// matching the tool's default behavior.
fn build_classes(uppercase: bool, lowercase: bool, digits: bool) -> CharacterClasses {
    if !uppercase && !lowercase && !digits {
        CharacterClasses::all()
    } else {
        CharacterClasses {
            uppercase,
            lowercase,
            digits,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handler = ReplacementHandler::new(cli.verbose);

    match &cli.command {
        Some(Commands::Rotate {
            input,
            output,
            length,
            uppercase,
            lowercase,
            digits,
            secret,
        }) => {
            let classes = build_classes(*uppercase, *lowercase, *digits);
            handler.rotate(input, output.as_deref(), *length, classes, secret.as_deref())?;
        }
        Some(Commands::Generate {
            length,
            uppercase,
            lowercase,
            digits,
        }) => {
            let classes = build_classes(*uppercase, *lowercase, *digits);
            let secret = replacer::SecretGenerator::new()
                .generate(*length, classes)
                .with_context(|| "Secret generation failed")?;
            println!("{}", secret);
        }
        None => {
            // Default: plain replacement mode
            let input = cli
                .input
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
            let find = cli
                .find
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("--find is required"))?;

            handler.replace(input, cli.output.as_deref(), find, &cli.replace)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_class_flags_enables_all() {
        let classes = build_classes(false, false, false);
        assert!(classes.uppercase && classes.lowercase && classes.digits);
    }

    #[test]
    fn test_explicit_class_flags_are_exact() {
        let classes = build_classes(false, false, true);
        assert!(!classes.uppercase);
        assert!(!classes.lowercase);
        assert!(classes.digits);
    }
}
