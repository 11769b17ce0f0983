//! The in-memory corpus snapshot and its derived indexes.

use ahash::AHashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::dictionary::{Kanji, KanjiDetails, Word};
use crate::error::{Result, RinkuError};

/// A loaded corpus of word records with lookup indexes.
///
/// The corpus is immutable once built. Word order is the order of the
/// backing file; `suggest` results follow it. The kanji index maps each
/// distinct `character` to its record, first occurrence winning, which
/// matches the uniqueness invariant of the data.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    by_text: AHashMap<String, usize>,
    kanji_by_char: AHashMap<String, Kanji>,
}

impl Corpus {
    /// Build a corpus from an ordered list of word records.
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut by_text = AHashMap::with_capacity(words.len());
        let mut kanji_by_char = AHashMap::new();

        for (i, word) in words.iter().enumerate() {
            by_text.entry(word.text.clone()).or_insert(i);
            for kanji in &word.kanji_components {
                kanji_by_char
                    .entry(kanji.character.clone())
                    .or_insert_with(|| kanji.clone());
            }
        }

        Corpus {
            words,
            by_text,
            kanji_by_char,
        }
    }

    /// All words, in corpus order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the corpus.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Resolve a word by its exact surface form.
    pub fn resolve_by_text(&self, text: &str) -> Option<&Word> {
        self.by_text.get(text).map(|&i| &self.words[i])
    }

    /// Suggest word texts starting with the given prefix, in corpus order.
    ///
    /// Matching is case-sensitive. An empty prefix yields an empty list,
    /// never the whole corpus.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|w| w.text.starts_with(prefix))
            .map(|w| w.text.clone())
            .collect()
    }

    /// Look up a kanji record by its exact character.
    pub fn kanji(&self, character: &str) -> Option<&Kanji> {
        self.kanji_by_char.get(character)
    }

    /// Number of distinct kanji indexed from the corpus.
    pub fn kanji_count(&self) -> usize {
        self.kanji_by_char.len()
    }

    /// Return the detail view for a character, or `None` if the character
    /// was never part of any loaded word.
    ///
    /// Absence is a normal outcome: any query that matches no indexed
    /// character, a multi-glyph string included, is `Ok(None)`. Only the
    /// empty query is rejected with [`RinkuError::InvalidInput`], before
    /// any lookup.
    pub fn kanji_details(&self, character: &str) -> Result<Option<KanjiDetails>> {
        if character.is_empty() {
            return Err(RinkuError::invalid_input("kanji character is required"));
        }
        // The index only holds single glyphs, so a longer query can never
        // match.
        if character.graphemes(true).count() != 1 {
            return Ok(None);
        }
        Ok(self.kanji(character).map(|k| k.details()))
    }
}
