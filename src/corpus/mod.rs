//! Corpus loading, caching, and lookup.
//!
//! [`CorpusStore`](store::CorpusStore) reads the backing JSON file once and
//! caches the parsed [`Corpus`](corpus::Corpus) for its lifetime. All word
//! resolution, prefix suggestion, and kanji detail queries go through the
//! store; pass the store into the components that need it rather than
//! reading process-wide state.

pub mod corpus;
pub mod store;

pub use corpus::Corpus;
pub use store::CorpusStore;
