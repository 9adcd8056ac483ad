//! Command line argument parsing for the wordladder CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// wordladder - find chains of synonyms between two words
#[derive(Parser, Debug, Clone)]
#[command(name = "wordladder")]
#[command(about = "Build a thesaurus graph and find synonym ladders between words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LadderArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDLADDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot file, overrides the configured one
    #[arg(short, long, value_name = "SNAPSHOT_FILE", env = "WORDLADDER_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LadderArgs {
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
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the snapshot from synset sources
    Build(BuildArgs),

    /// Find a synonym ladder between two words
    Ladder(LadderQueryArgs),

    /// Show synonyms, antonyms and definitions of a word
    Lookup(LookupArgs),

    /// Show thesaurus statistics
    Stats(StatsArgs),

    /// Ask for start and end words until an empty line
    Interactive(InteractiveArgs),
}

/// Arguments for building the snapshot
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Synset source file (XML or JSON); repeat for several. Replaces the
    /// configured sources.
    #[arg(long = "source", value_name = "SOURCE_FILE")]
    pub sources: Vec<PathBuf>,

    /// Overwrite an existing snapshot
    #[arg(long)]
    pub force: bool,

    /// Build sources in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for a ladder query
#[derive(Parser, Debug, Clone)]
pub struct LadderQueryArgs {
    /// Word to start from
    #[arg(value_name = "START")]
    pub start: String,

    /// Word to reach
    #[arg(value_name = "END")]
    pub end: String,

    /// Give up after discovering this many words
    #[arg(long)]
    pub max_visited: Option<usize>,
}

/// Arguments for a word lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Include per-category word counts
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the interactive prompt
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Give up after discovering this many words
    #[arg(long)]
    pub max_visited: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
