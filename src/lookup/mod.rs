//! External single-character lookup providers.
//!
//! [`KanjiLookup`](provider::KanjiLookup) is the seam between the graph
//! builder's consolidated strategy and whatever dictionary service backs
//! it. [`JishoLookup`](jisho::JishoLookup) talks to the jisho.org API;
//! [`StaticLookup`](static_lookup::StaticLookup) serves a fixed in-memory
//! table for tests and offline use.

pub mod jisho;
pub mod provider;
pub mod static_lookup;

pub use jisho::JishoLookup;
pub use provider::{KanjiLookup, LookupEntry};
pub use static_lookup::StaticLookup;
