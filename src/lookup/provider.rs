//! Unified lookup trait for external kanji resolution.
//!
//! This module provides the [`KanjiLookup`] trait, the interface the graph
//! builder's consolidated strategy uses to resolve a single character into
//! canonical dictionary entries.
//!
//! # Design
//!
//! The trait abstracts over different lookup backends:
//! - HTTP dictionary APIs (see [`JishoLookup`](crate::lookup::JishoLookup))
//! - Fixed in-memory tables for tests and offline use
//!   (see [`StaticLookup`](crate::lookup::StaticLookup))
//!
//! A provider returns every entry it knows for the character: zero entries
//! means the character is unknown upstream, more than one means the
//! character has homograph entries that the builder consolidates into a
//! single node. A transient failure is reported as
//! [`RinkuError::UpstreamUnavailable`](crate::error::RinkuError); the
//! builder absorbs it per character and never fails the whole graph for it.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One dictionary entry reported by an external lookup provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    /// The provider's canonical string identifier for the entry.
    pub slug: String,
    /// Meanings reported by this entry, in provider order.
    pub meanings: Vec<String>,
}

impl LookupEntry {
    /// Create a new lookup entry.
    pub fn new<S: Into<String>>(slug: S, meanings: Vec<String>) -> Self {
        LookupEntry {
            slug: slug.into(),
            meanings,
        }
    }
}

/// Trait for resolving a single kanji character against an external
/// dictionary.
#[async_trait]
pub trait KanjiLookup: Send + Sync + Debug {
    /// Look up every entry the provider knows for the character.
    ///
    /// An unknown character is `Ok(vec![])`, not an error.
    async fn lookup(&self, character: &str) -> Result<Vec<LookupEntry>>;

    /// Human-readable provider name, for diagnostics.
    fn name(&self) -> &str;
}
