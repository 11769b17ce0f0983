//! # Rinku
//!
//! A kanji relationship graph engine for Japanese vocabulary.
//!
//! ## Features
//!
//! - Immutable word and kanji records with a JSON corpus format
//! - Load-once cached corpus store with exact and prefix lookups
//! - Deduplicated word→kanji display graphs with a stable wire shape
//! - Pluggable kanji identity: local record ids or slugs consolidated
//!   from an external dictionary lookup
//! - Per-character lookup concurrency with timeout degradation

pub mod cli;
pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod graph;
pub mod lookup;

pub mod prelude {
    //! Convenient re-exports of the most common types.

    pub use crate::corpus::{Corpus, CorpusStore};
    pub use crate::dictionary::{Kanji, KanjiDetails, Word};
    pub use crate::error::{Result, RinkuError};
    pub use crate::graph::{Graph, GraphBuilder, GraphEdge, GraphNode};
    pub use crate::lookup::{KanjiLookup, LookupEntry};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
