//! Kanji record type and the detail view derived from it.

use serde::{Deserialize, Serialize};

/// An immutable record for one kanji character and its metadata.
///
/// `character` is the natural key: non-empty, a single glyph, and logically
/// unique within a loaded corpus. `components` lists sub-glyph characters
/// by their surface form; a listed component may reference a character that
/// is not separately modeled in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kanji {
    /// Stable numeric identifier within the corpus.
    pub id: u64,
    /// The glyph itself.
    pub character: String,
    /// English meaning, comma-separated when there are several.
    pub meaning: String,
    /// On (Sino-Japanese) readings, in source order.
    #[serde(default)]
    pub on_reading: Vec<String>,
    /// Kun (native) readings, in source order.
    #[serde(default)]
    pub kun_reading: Vec<String>,
    /// Sub-glyph components, in source order. May be empty.
    #[serde(default)]
    pub components: Vec<String>,
}

impl Kanji {
    /// Create a new kanji record.
    pub fn new<S: Into<String>, M: Into<String>>(id: u64, character: S, meaning: M) -> Self {
        Kanji {
            id,
            character: character.into(),
            meaning: meaning.into(),
            on_reading: Vec::new(),
            kun_reading: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Set the on readings.
    pub fn with_on_reading(mut self, readings: Vec<String>) -> Self {
        self.on_reading = readings;
        self
    }

    /// Set the kun readings.
    pub fn with_kun_reading(mut self, readings: Vec<String>) -> Self {
        self.kun_reading = readings;
        self
    }

    /// Set the sub-glyph components.
    pub fn with_components(mut self, components: Vec<String>) -> Self {
        self.components = components;
        self
    }

    /// Produce the flat detail view served for this kanji.
    pub fn details(&self) -> KanjiDetails {
        KanjiDetails {
            character: self.character.clone(),
            meaning: self.meaning.clone(),
            on_reading: self.on_reading.clone(),
            kun_reading: self.kun_reading.clone(),
            components: self.components.clone(),
        }
    }
}

/// The flat kanji detail shape consumed by detail panels.
///
/// This is a fixed wire contract; field names match the backing record
/// format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiDetails {
    /// The glyph itself.
    pub character: String,
    /// English meaning.
    pub meaning: String,
    /// On readings.
    pub on_reading: Vec<String>,
    /// Kun readings.
    pub kun_reading: Vec<String>,
    /// Sub-glyph components.
    pub components: Vec<String>,
}
