//! Command line argument parsing for the autocorrect CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::CorrectorConfig;

/// autocorrect - frequency-ranked single-word spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "autocorrect")]
#[command(about = "Correct misspelled words using word frequencies from a reference corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AutocorrectArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "AUTOCORRECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Farthest edit distance to search (0-2), overrides the configuration file
    #[arg(long, value_name = "DISTANCE")]
    pub max_distance: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AutocorrectArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the corrector configuration from the config file and flags.
    pub fn corrector_config(&self) -> Result<CorrectorConfig> {
        let mut config = match &self.config {
            Some(path) => CorrectorConfig::load_from_file(path)?,
            None => CorrectorConfig::default(),
        };

        if let Some(max_distance) = self.max_distance {
            config.max_distance = max_distance;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct one or more words
    Correct(CorrectArgs),

    /// Show the candidate tier and ranking for a word
    Candidates(CandidatesArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

/// Arguments for correcting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Reference corpus (plain text)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Use the words as given instead of lowercasing them
    #[arg(long)]
    pub keep_case: bool,
}

/// Arguments for listing candidates
#[derive(Parser, Debug, Clone)]
pub struct CandidatesArgs {
    /// Reference corpus (plain text)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Word to inspect
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of candidates to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Reference corpus (plain text)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Number of most frequent words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
