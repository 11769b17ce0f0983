//! Lookup provider backed by a fixed in-memory table.
//!
//! [`StaticLookup`] serves pre-registered entries without any network
//! traffic. Use it in tests, or to run the consolidated graph strategy
//! against a bundled dictionary snapshot.

use ahash::AHashMap;
use async_trait::async_trait;

use crate::error::{Result, RinkuError};
use crate::lookup::provider::{KanjiLookup, LookupEntry};

/// A lookup provider that serves a fixed table of entries.
///
/// Characters with no registered entries resolve to an empty list, the
/// same "unknown upstream" outcome a live provider would report.
/// Characters registered with [`fail`](StaticLookup::fail) return
/// [`RinkuError::UpstreamUnavailable`] instead, which lets tests exercise
/// the builder's degradation path.
///
/// # Examples
///
/// ```
/// use rinku::lookup::{KanjiLookup, LookupEntry, StaticLookup};
///
/// # async fn example() -> rinku::error::Result<()> {
/// let lookup = StaticLookup::new()
///     .with_entry("日", LookupEntry::new("日-1", vec!["day".to_string()]))
///     .with_entry("日", LookupEntry::new("日-2", vec!["sun".to_string()]));
///
/// assert_eq!(lookup.lookup("日").await?.len(), 2);
/// assert!(lookup.lookup("本").await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    entries: AHashMap<String, Vec<LookupEntry>>,
    failures: AHashMap<String, String>,
}

impl StaticLookup {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one entry for a character. Repeated registrations for the
    /// same character accumulate, producing homograph entries.
    pub fn with_entry<S: Into<String>>(mut self, character: S, entry: LookupEntry) -> Self {
        self.entries.entry(character.into()).or_default().push(entry);
        self
    }

    /// Register a character whose lookup fails as transient-unavailable.
    pub fn fail<S: Into<String>, M: Into<String>>(mut self, character: S, message: M) -> Self {
        self.failures.insert(character.into(), message.into());
        self
    }
}

#[async_trait]
impl KanjiLookup for StaticLookup {
    async fn lookup(&self, character: &str) -> Result<Vec<LookupEntry>> {
        if let Some(message) = self.failures.get(character) {
            return Err(RinkuError::upstream(message.clone()));
        }
        Ok(self.entries.get(character).cloned().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "static"
    }
}
