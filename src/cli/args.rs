//! Command line argument parsing for the Rinku CLI using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

/// Rinku - a kanji relationship graph engine
#[derive(Parser, Debug, Clone)]
#[command(name = "rinku")]
#[command(about = "Build word/kanji relationship graphs from a vocabulary corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RinkuArgs {
    /// Path to the corpus JSON file
    #[arg(short, long, env = "RINKU_DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the display graph for a word
    Graph(GraphArgs),

    /// Suggest corpus words by prefix
    Suggest(SuggestArgs),

    /// Show the detail record for a single kanji
    Kanji(KanjiArgs),
}

/// Arguments for the graph command.
#[derive(Parser, Debug, Clone)]
pub struct GraphArgs {
    /// The word's surface form
    pub word: String,

    /// Resolve kanji identity through the jisho.org API instead of the
    /// local record ids
    #[arg(long)]
    pub consolidated: bool,

    /// Per-character lookup timeout in milliseconds (consolidated only)
    #[arg(long, default_value_t = 5000)]
    pub lookup_timeout_ms: u64,
}

impl GraphArgs {
    /// The per-character lookup timeout.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

/// Arguments for the suggest command.
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The prefix to match word texts against
    pub prefix: String,
}

/// Arguments for the kanji command.
#[derive(Parser, Debug, Clone)]
pub struct KanjiArgs {
    /// The kanji character
    pub character: String,
}
