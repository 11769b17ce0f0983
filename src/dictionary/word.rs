//! Word record type.

use serde::{Deserialize, Serialize};

use crate::dictionary::kanji::Kanji;

/// An immutable record for one vocabulary entry.
///
/// `text` is the natural key (the surface form). `kanji_components` is the
/// ordered list of kanji the word is composed of; it may be empty for
/// kana-only words. The graph builder takes this list as given and never
/// re-derives it from `text`, so a component's `character` is expected to
/// be a glyph that actually occurs in the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Stable numeric identifier within the corpus.
    pub id: u64,
    /// The surface form.
    pub text: String,
    /// Kana reading.
    pub reading: String,
    /// English meaning.
    pub meaning: String,
    /// Constituent kanji, in display order. Empty for kana-only words.
    #[serde(default)]
    pub kanji_components: Vec<Kanji>,
}

impl Word {
    /// Create a new word record with no kanji components.
    pub fn new<S, R, M>(id: u64, text: S, reading: R, meaning: M) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        M: Into<String>,
    {
        Word {
            id,
            text: text.into(),
            reading: reading.into(),
            meaning: meaning.into(),
            kanji_components: Vec::new(),
        }
    }

    /// Set the kanji components.
    pub fn with_kanji_components(mut self, components: Vec<Kanji>) -> Self {
        self.kanji_components = components;
        self
    }

    /// Check whether this word contains any kanji.
    pub fn has_kanji(&self) -> bool {
        !self.kanji_components.is_empty()
    }
}
