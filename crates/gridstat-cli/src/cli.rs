use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract per-team statistics from football game reports.
///
/// Input is a word dump: a JSON array of `{"page", "text", "x0", "top"}`
/// objects with 1-based page numbers, in reading order.
#[derive(Debug, Parser)]
#[command(name = "gridstat", about, version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the reconstructed lines of a report
    Lines {
        /// Path to the word dump
        #[arg(value_name = "WORDS")]
        file: PathBuf,

        /// Vertical margin for joining words into a line (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        margin: f64,

        /// Apply Unicode normalization to word text
        #[arg(long, value_enum)]
        unicode_norm: Option<UnicodeNormArg>,
    },

    /// Extract both teams' statistics
    Stats {
        /// Path to the word dump
        #[arg(value_name = "WORDS")]
        file: PathBuf,

        /// Roster entry as NAME=ABBR (repeat for every team)
        #[arg(long = "team", value_name = "NAME=ABBR", required = true)]
        teams: Vec<String>,

        /// Run gains above this many yards count as big runs
        #[arg(long, default_value_t = 15)]
        run_threshold: i32,

        /// Pass gains above this many yards count as big passes
        #[arg(long, default_value_t = 20)]
        pass_threshold: i32,

        /// Output format
        #[arg(long, value_enum, default_value_t = StatsFormat::Json)]
        format: StatsFormat,

        /// Vertical margin for joining words into a line (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        margin: f64,

        /// Append redzone and series scoring rates
        #[arg(long)]
        rates: bool,

        /// Fail on warnings
        #[arg(long)]
        strict: bool,

        /// Apply Unicode normalization to word text
        #[arg(long, value_enum)]
        unicode_norm: Option<UnicodeNormArg>,
    },

    /// Print the starting field position of every drive as CSV
    FieldPositions {
        /// Path to the word dump
        #[arg(value_name = "WORDS")]
        file: PathBuf,

        /// Roster entry as NAME=ABBR (repeat for every team)
        #[arg(long = "team", value_name = "NAME=ABBR", required = true)]
        teams: Vec<String>,

        /// Vertical margin for joining words into a line (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        margin: f64,

        /// Apply Unicode normalization to word text
        #[arg(long, value_enum)]
        unicode_norm: Option<UnicodeNormArg>,
    },
}

/// Output format for the stats subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum StatsFormat {
    /// JSON array of the two flattened team records
    Json,
    /// Header line plus one row per team
    Csv,
}

/// Unicode normalization form.
#[derive(Debug, Clone, ValueEnum)]
pub enum UnicodeNormArg {
    /// Canonical Decomposition, followed by Canonical Composition
    Nfc,
    /// Canonical Decomposition
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition
    Nfkc,
    /// Compatibility Decomposition
    Nfkd,
}

impl UnicodeNormArg {
    /// Convert to the library's `UnicodeNorm` enum.
    pub fn to_unicode_norm(&self) -> gridstat::UnicodeNorm {
        match self {
            UnicodeNormArg::Nfc => gridstat::UnicodeNorm::Nfc,
            UnicodeNormArg::Nfd => gridstat::UnicodeNorm::Nfd,
            UnicodeNormArg::Nfkc => gridstat::UnicodeNorm::Nfkc,
            UnicodeNormArg::Nfkd => gridstat::UnicodeNorm::Nfkd,
        }
    }
}
