//! Jisho.org API-based lookup provider.
//!
//! Queries the public jisho.org word-search API with a single kanji
//! character and keeps only the entries whose Japanese form matches that
//! character exactly, so compound words containing the character do not
//! leak into the result.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Result, RinkuError};
use crate::lookup::provider::{KanjiLookup, LookupEntry};

/// Default endpoint for the jisho.org word-search API.
pub const JISHO_API_URL: &str = "https://jisho.org/api/v1/search/words";

/// Response structure from the jisho.org search API.
#[derive(Debug, Deserialize)]
struct JishoResponse {
    /// List of matching dictionary entries.
    #[serde(default)]
    data: Vec<JishoEntry>,
}

/// Individual dictionary entry from the API response.
#[derive(Debug, Deserialize)]
struct JishoEntry {
    /// Canonical identifier of the entry.
    slug: String,
    /// Japanese forms of the entry.
    #[serde(default)]
    japanese: Vec<JishoJapanese>,
    /// Sense groups, each carrying English definitions.
    #[serde(default)]
    senses: Vec<JishoSense>,
}

/// One Japanese form (surface and reading) of an entry.
#[derive(Debug, Deserialize)]
struct JishoJapanese {
    /// The written form, absent for kana-only entries.
    word: Option<String>,
}

/// One sense group of an entry.
#[derive(Debug, Deserialize)]
struct JishoSense {
    /// English definitions for this sense.
    #[serde(default)]
    english_definitions: Vec<String>,
}

impl JishoEntry {
    /// Check whether this entry's written form is exactly the character.
    ///
    /// Homograph entries carry slugs like `日-1`, so the slug alone is not
    /// a reliable match key.
    fn matches(&self, character: &str) -> bool {
        self.slug == character
            || self.slug.starts_with(&format!("{character}-"))
            || self
                .japanese
                .iter()
                .any(|j| j.word.as_deref() == Some(character))
    }

    /// Flatten the entry's senses into one ordered meanings list.
    fn meanings(&self) -> Vec<String> {
        self.senses
            .iter()
            .flat_map(|s| s.english_definitions.iter().cloned())
            .collect()
    }
}

/// A lookup provider backed by the jisho.org API.
///
/// Requires network access; every call is one HTTP request. Transport
/// errors and non-2xx responses are reported as
/// [`RinkuError::UpstreamUnavailable`], which the consolidated graph
/// builder absorbs per character.
///
/// # Examples
///
/// ```no_run
/// use rinku::lookup::{JishoLookup, KanjiLookup};
///
/// # async fn example() -> rinku::error::Result<()> {
/// let lookup = JishoLookup::new();
/// let entries = lookup.lookup("日").await?;
/// for entry in entries {
///     println!("{}: {:?}", entry.slug, entry.meanings);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JishoLookup {
    client: Client,
    base_url: String,
}

impl JishoLookup {
    /// Create a provider against the public jisho.org endpoint.
    pub fn new() -> Self {
        Self::with_base_url(JISHO_API_URL)
    }

    /// Create a provider against a custom endpoint, for testing against a
    /// local server.
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        JishoLookup {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for JishoLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KanjiLookup for JishoLookup {
    async fn lookup(&self, character: &str) -> Result<Vec<LookupEntry>> {
        if character.is_empty() {
            return Err(RinkuError::invalid_input("lookup character is empty"));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("keyword", character)])
            .send()
            .await
            .map_err(|e| RinkuError::upstream(format!("jisho request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(RinkuError::upstream(format!(
                "jisho returned status {}",
                response.status()
            )));
        }

        let body: JishoResponse = response
            .json()
            .await
            .map_err(|e| RinkuError::upstream(format!("jisho response unparsable: {e}")))?;

        Ok(body
            .data
            .iter()
            .filter(|entry| entry.matches(character))
            .map(|entry| LookupEntry::new(entry.slug.clone(), entry.meanings()))
            .collect())
    }

    fn name(&self) -> &str {
        "jisho"
    }
}
