//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// AnchorLens - pattern analyzer for Angela anchor-suggestion test runs
///
/// Reads the latest Angela Paris test-results file, groups the suggested
/// anchors by trip-intent facet (budget, vibe, priority, mobility), scores
/// them against fixed keyword vocabularies, and prints a pattern report
/// to the console.
///
/// Examples:
///   anchorlens
///   anchorlens --dir ./test-output
///   anchorlens --file angela-paris-test-results-2025-08-14.json
///   anchorlens --top-words 20 --verbose
///   anchorlens --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Directory to search for result files
    ///
    /// If not specified, uses the config file setting or the current
    /// directory.
    #[arg(short, long, value_name = "DIR", env = "ANCHORLENS_DIR")]
    pub dir: Option<PathBuf>,

    /// Analyze a specific result file instead of discovering the latest
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// How many title words to rank in the common-patterns section
    #[arg(long, value_name = "COUNT")]
    pub top_words: Option<usize>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .anchorlens.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .anchorlens.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate top words if provided
        if let Some(top_words) = self.top_words {
            if top_words == 0 {
                return Err("Top words must be at least 1".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            dir: None,
            file: None,
            top_words: None,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_defaults_ok() {
        let args = make_args();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_zero_top_words() {
        let mut args = make_args();
        args.top_words = Some(0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_init_config_skips_validation() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        args.init_config = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
