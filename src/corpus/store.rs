//! Load-once cached access to the backing corpus file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::corpus::corpus::Corpus;
use crate::dictionary::{KanjiDetails, Word};
use crate::error::{Result, RinkuError};

/// A corpus provider with a single load-once cache.
///
/// The backing file is an ordered JSON array of word records. The first
/// successful load is cached for the store's lifetime; subsequent calls
/// return the cached snapshot without re-reading the file. The cache is
/// guarded by a mutex held across the load, so concurrent first accesses
/// are single-flight: exactly one load occurs and every racer observes the
/// same resulting `Arc`.
///
/// `reload` invalidates and loads again, for tests and operational
/// refresh. A failed load leaves the cache empty, so callers may retry.
#[derive(Debug)]
pub struct CorpusStore {
    path: PathBuf,
    cache: Mutex<Option<Arc<Corpus>>>,
}

impl CorpusStore {
    /// Create a store for the given corpus file. The file is not touched
    /// until the first query.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        CorpusStore {
            path: path.as_ref().to_path_buf(),
            cache: Mutex::new(None),
        }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the loaded corpus, reading the backing file on first access.
    pub fn corpus(&self) -> Result<Arc<Corpus>> {
        let mut cache = self.cache.lock();
        if let Some(corpus) = cache.as_ref() {
            return Ok(Arc::clone(corpus));
        }

        let corpus = Arc::new(self.load()?);
        *cache = Some(Arc::clone(&corpus));
        Ok(corpus)
    }

    /// Drop the cached corpus and load it again from the backing file.
    pub fn reload(&self) -> Result<Arc<Corpus>> {
        let mut cache = self.cache.lock();
        let corpus = Arc::new(self.load()?);
        *cache = Some(Arc::clone(&corpus));
        Ok(corpus)
    }

    fn load(&self) -> Result<Corpus> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "corpus file unreadable");
            RinkuError::data_unavailable(format!(
                "cannot read corpus file {}: {e}",
                self.path.display()
            ))
        })?;

        let words: Vec<Word> = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "corpus file unparsable");
            RinkuError::data_unavailable(format!(
                "cannot parse corpus file {}: {e}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), words = words.len(), "corpus loaded");
        Ok(Corpus::from_words(words))
    }

    /// Resolve a word by its exact surface form.
    pub fn resolve_by_text(&self, text: &str) -> Result<Option<Word>> {
        Ok(self.corpus()?.resolve_by_text(text).cloned())
    }

    /// Suggest word texts starting with the given prefix.
    pub fn suggest(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self.corpus()?.suggest(prefix))
    }

    /// Return the detail view for a character, or `None` when absent.
    pub fn kanji_details(&self, character: &str) -> Result<Option<KanjiDetails>> {
        self.corpus()?.kanji_details(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "text": "日本語",
            "reading": "にほんご",
            "meaning": "Japanese language",
            "kanji_components": [
                {"id": 101, "character": "日", "meaning": "day, sun"},
                {"id": 102, "character": "本", "meaning": "book, origin"},
                {"id": 103, "character": "語", "meaning": "language, word"}
            ]
        },
        {"id": 2, "text": "これ", "reading": "これ", "meaning": "this"}
    ]"#;

    fn sample_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_resolve() {
        let file = sample_file();
        let store = CorpusStore::open(file.path());

        let word = store.resolve_by_text("日本語").unwrap().unwrap();
        assert_eq!(word.id, 1);
        assert_eq!(word.kanji_components.len(), 3);
        assert!(store.resolve_by_text("英語").unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let store = CorpusStore::open("/nonexistent/data.json");
        assert!(matches!(
            store.corpus(),
            Err(RinkuError::DataUnavailable(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_data_unavailable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let store = CorpusStore::open(file.path());
        assert!(matches!(
            store.corpus(),
            Err(RinkuError::DataUnavailable(_))
        ));
    }

    #[test]
    fn test_cache_survives_file_removal() {
        let file = sample_file();
        let store = CorpusStore::open(file.path());
        let first = store.corpus().unwrap();

        // Deleting the backing file must not affect the cached snapshot.
        drop(file);
        let second = store.corpus().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let store = CorpusStore::open(file.path());
        assert_eq!(store.corpus().unwrap().len(), 2);

        let replacement = r#"[{"id": 9, "text": "水", "reading": "みず", "meaning": "water"}]"#;
        std::fs::write(file.path(), replacement).unwrap();

        // Cached snapshot is unchanged until an explicit reload.
        assert_eq!(store.corpus().unwrap().len(), 2);
        assert_eq!(store.reload().unwrap().len(), 1);
        assert_eq!(store.corpus().unwrap().len(), 1);
    }

    #[test]
    fn test_concurrent_first_load_is_single_flight() {
        let file = sample_file();
        let store = Arc::new(CorpusStore::open(file.path()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.corpus().unwrap())
            })
            .collect();

        let snapshots: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for snapshot in &snapshots[1..] {
            assert!(Arc::ptr_eq(&snapshots[0], snapshot));
        }
    }

    #[test]
    fn test_suggest_via_store() {
        let file = sample_file();
        let store = CorpusStore::open(file.path());
        assert_eq!(store.suggest("日").unwrap(), vec!["日本語"]);
        assert!(store.suggest("").unwrap().is_empty());
    }
}
