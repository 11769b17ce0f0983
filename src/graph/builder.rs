//! Graph builder with injectable kanji identity strategies.
//!
//! The builder expands word records into a display graph in one pass,
//! deduplicating nodes and edges by id. Kanji node identity is decided by
//! the strategy selected at construction time:
//!
//! - **Local** ([`GraphBuilder::new`]): identity is the kanji record's own
//!   id (`kanji-<id>`), node fields come from the record, and
//!   [`build`](GraphBuilder::build) is pure and synchronous.
//! - **Consolidated** ([`GraphBuilder::with_lookup`]): identity is the
//!   canonical slug reported by an external [`KanjiLookup`] provider.
//!   Homograph entries for one character merge into a single node, and
//!   [`build_consolidated`](GraphBuilder::build_consolidated) issues the
//!   per-character lookups concurrently. A failed, timed-out, or empty
//!   lookup degrades the graph by skipping that character's node and edge;
//!   it never fails the whole build.
//!
//! Both strategies share the same emission pass, so the output order is
//! deterministic (first-seen order over the input) regardless of how
//! lookups complete.

use std::sync::Arc;
use std::time::Duration;

use ahash::{AHashMap, AHashSet};
use futures::future::join_all;
use tracing::{debug, warn};

use crate::dictionary::{Kanji, Word};
use crate::error::{Result, RinkuError};
use crate::graph::node::{Graph, GraphEdge, GraphNode};
use crate::lookup::{KanjiLookup, LookupEntry};

/// Resolved identity and display fields for one kanji node.
#[derive(Debug, Clone)]
struct KanjiNodeSpec {
    id: String,
    label: String,
    meanings: Vec<String>,
    is_consolidated: bool,
}

impl KanjiNodeSpec {
    /// Identity from the kanji record itself.
    fn local(kanji: &Kanji) -> Self {
        KanjiNodeSpec {
            id: format!("kanji-{}", kanji.id),
            label: kanji.character.clone(),
            meanings: vec![kanji.meaning.clone()],
            is_consolidated: false,
        }
    }

    /// Identity merged from external entries for one character.
    ///
    /// Returns `None` when no entry was reported, so the caller skips the
    /// node. The first entry's slug becomes the node id; every entry's
    /// meanings contribute, in provider order.
    fn consolidated(character: &str, entries: &[LookupEntry]) -> Option<Self> {
        let first = entries.first()?;
        Some(KanjiNodeSpec {
            id: first.slug.clone(),
            label: character.to_string(),
            meanings: entries.iter().flat_map(|e| e.meanings.clone()).collect(),
            is_consolidated: entries.len() > 1,
        })
    }
}

/// Builds word/kanji display graphs from word records.
///
/// The builder holds no request state; one builder can serve any number of
/// calls, concurrently.
///
/// # Examples
///
/// ```
/// use rinku::dictionary::{Kanji, Word};
/// use rinku::graph::GraphBuilder;
///
/// let word = Word::new(1, "日本", "にほん", "Japan").with_kanji_components(vec![
///     Kanji::new(101, "日", "day, sun"),
///     Kanji::new(102, "本", "book, origin"),
/// ]);
///
/// let graph = GraphBuilder::new().build(&[word]);
/// assert_eq!(graph.nodes.len(), 3);
/// assert_eq!(graph.edges.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    lookup: Option<Arc<dyn KanjiLookup>>,
    lookup_timeout: Option<Duration>,
}

impl GraphBuilder {
    /// Create a builder using the local identity strategy.
    pub fn new() -> Self {
        GraphBuilder::default()
    }

    /// Create a builder using the consolidated identity strategy backed by
    /// the given lookup provider.
    pub fn with_lookup(lookup: Arc<dyn KanjiLookup>) -> Self {
        GraphBuilder {
            lookup: Some(lookup),
            lookup_timeout: None,
        }
    }

    /// Set a per-character timeout for external lookups. A lookup that
    /// exceeds it is treated as failed: the character's node and edge are
    /// skipped.
    pub fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    /// Build a graph under the local identity strategy.
    ///
    /// Pure and synchronous: kanji identity and display fields come from
    /// the records themselves. Empty input yields an empty graph.
    pub fn build(&self, target_words: &[Word]) -> Graph {
        assemble(target_words, |kanji| Some(KanjiNodeSpec::local(kanji)))
    }

    /// Build a graph under the consolidated identity strategy.
    ///
    /// Each distinct character across the input is resolved through the
    /// lookup provider exactly once; lookups run concurrently and merge
    /// back in first-seen character order, so node emission order matches
    /// [`build`](GraphBuilder::build). Returns an error only when the
    /// builder was constructed without a provider; per-character upstream
    /// failures degrade the graph instead.
    pub async fn build_consolidated(&self, target_words: &[Word]) -> Result<Graph> {
        let lookup = self.lookup.as_ref().ok_or_else(|| {
            RinkuError::invalid_input("consolidated build requires a lookup provider")
        })?;

        // One lookup per distinct character, in first-seen order.
        let mut characters = Vec::new();
        let mut seen = AHashSet::new();
        for word in target_words {
            for kanji in &word.kanji_components {
                if seen.insert(kanji.character.as_str()) {
                    characters.push(kanji.character.as_str());
                }
            }
        }

        let lookups = characters.iter().map(|&character| async move {
            (
                character,
                self.resolve_character(lookup.as_ref(), character).await,
            )
        });
        let resolved: AHashMap<&str, Option<KanjiNodeSpec>> =
            join_all(lookups).await.into_iter().collect();

        Ok(assemble(target_words, |kanji| {
            resolved
                .get(kanji.character.as_str())
                .and_then(|spec| spec.clone())
        }))
    }

    /// Resolve one character through the provider, honoring the configured
    /// timeout. Failure and absence both collapse to `None`.
    async fn resolve_character(
        &self,
        lookup: &dyn KanjiLookup,
        character: &str,
    ) -> Option<KanjiNodeSpec> {
        let outcome = match self.lookup_timeout {
            Some(timeout) => tokio::time::timeout(timeout, lookup.lookup(character))
                .await
                .unwrap_or_else(|_| {
                    Err(RinkuError::timeout(format!("lookup for {character}")))
                }),
            None => lookup.lookup(character).await,
        };

        match outcome {
            Ok(entries) => {
                let spec = KanjiNodeSpec::consolidated(character, &entries);
                if spec.is_none() {
                    debug!(character, provider = lookup.name(), "no lookup entries");
                }
                spec
            }
            Err(e) => {
                warn!(character, provider = lookup.name(), error = %e, "lookup failed");
                None
            }
        }
    }
}

/// Shared emission pass over the input words.
///
/// `resolve` is the active identity strategy: it returns the node spec for
/// a kanji component, or `None` to skip both the node and its edge. Nodes
/// and edges are deduplicated by id and emitted in first-seen order.
fn assemble<F>(target_words: &[Word], resolve: F) -> Graph
where
    F: Fn(&Kanji) -> Option<KanjiNodeSpec>,
{
    let mut graph = Graph::new();
    let mut seen_words = AHashSet::new();
    let mut seen_kanji = AHashSet::new();
    let mut seen_edges = AHashSet::new();

    for word in target_words {
        let word_id = format!("word-{}", word.id);
        if seen_words.insert(word_id.clone()) {
            graph.nodes.push(GraphNode::Word {
                id: word_id.clone(),
                label: word.text.clone(),
                reading: word.reading.clone(),
                meaning: word.meaning.clone(),
            });
        }

        for kanji in &word.kanji_components {
            let Some(spec) = resolve(kanji) else {
                continue;
            };

            if seen_kanji.insert(spec.id.clone()) {
                graph.nodes.push(GraphNode::Kanji {
                    id: spec.id.clone(),
                    label: spec.label,
                    meanings: spec.meanings,
                    is_consolidated: spec.is_consolidated,
                });
            }

            if seen_edges.insert((word_id.clone(), spec.id.clone())) {
                graph.edges.push(GraphEdge::contains(word_id.clone(), spec.id));
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lookup::StaticLookup;

    fn nihongo() -> Word {
        Word::new(1, "日本語", "にほんご", "Japanese language").with_kanji_components(vec![
            Kanji::new(101, "日", "day, sun"),
            Kanji::new(102, "本", "book, origin"),
            Kanji::new(103, "語", "language, word"),
        ])
    }

    fn nihon() -> Word {
        Word::new(2, "日本", "にほん", "Japan").with_kanji_components(vec![
            Kanji::new(101, "日", "day, sun"),
            Kanji::new(102, "本", "book, origin"),
        ])
    }

    #[test]
    fn test_empty_input_yields_empty_graph() {
        let graph = GraphBuilder::new().build(&[]);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_local_three_kanji_word() {
        let graph = GraphBuilder::new().build(&[nihongo()]);

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["word-1", "kanji-101", "kanji-102", "kanji-103"]);

        assert_eq!(graph.edges.len(), 3);
        for (edge, target) in graph.edges.iter().zip(["kanji-101", "kanji-102", "kanji-103"]) {
            assert_eq!(edge.source, "word-1");
            assert_eq!(edge.target, target);
        }
    }

    #[test]
    fn test_kana_only_word_has_no_edges() {
        let word = Word::new(3, "これ", "これ", "this");
        let graph = GraphBuilder::new().build(&[word]);

        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.nodes[0].is_word());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_duplicate_words_are_idempotent() {
        let graph = GraphBuilder::new().build(&[nihongo(), nihongo()]);

        assert_eq!(graph.word_count(), 1);
        assert_eq!(graph.kanji_count(), 3);
        assert_eq!(graph.edges.len(), 3);
    }

    #[test]
    fn test_shared_kanji_across_words() {
        let graph = GraphBuilder::new().build(&[nihongo(), nihon()]);

        // 日 and 本 are shared; each appears once.
        assert_eq!(graph.word_count(), 2);
        assert_eq!(graph.kanji_count(), 3);
        assert_eq!(graph.edges.len(), 5);
    }

    #[test]
    fn test_repeated_kanji_within_word() {
        let word = Word::new(4, "日日", "ひにち", "every day").with_kanji_components(vec![
            Kanji::new(101, "日", "day, sun"),
            Kanji::new(101, "日", "day, sun"),
        ]);
        let graph = GraphBuilder::new().build(&[word]);

        assert_eq!(graph.kanji_count(), 1);
        assert_eq!(graph.edges.len(), 1);
    }

    #[tokio::test]
    async fn test_consolidated_merges_homograph_entries() {
        let lookup = StaticLookup::new()
            .with_entry("日", LookupEntry::new("日-1", vec!["day".to_string()]))
            .with_entry("日", LookupEntry::new("日-2", vec!["sun".to_string()]))
            .with_entry("本", LookupEntry::new("本", vec!["book".to_string()]))
            .with_entry("語", LookupEntry::new("語", vec!["language".to_string()]));

        let builder = GraphBuilder::with_lookup(Arc::new(lookup));
        let graph = builder.build_consolidated(&[nihongo()]).await.unwrap();

        let node = graph.node("日-1").unwrap();
        match node {
            GraphNode::Kanji {
                meanings,
                is_consolidated,
                ..
            } => {
                assert_eq!(meanings, &vec!["day".to_string(), "sun".to_string()]);
                assert!(is_consolidated);
            }
            _ => panic!("expected kanji node"),
        }

        // Single-entry characters are not flagged.
        match graph.node("本").unwrap() {
            GraphNode::Kanji {
                is_consolidated, ..
            } => assert!(!is_consolidated),
            _ => panic!("expected kanji node"),
        }
    }

    #[tokio::test]
    async fn test_consolidated_skips_failed_and_unknown_characters() {
        let lookup = StaticLookup::new()
            .with_entry("日", LookupEntry::new("日", vec!["day".to_string()]))
            .fail("本", "provider offline");
        // 語 is not registered at all.

        let builder = GraphBuilder::with_lookup(Arc::new(lookup));
        let graph = builder.build_consolidated(&[nihongo()]).await.unwrap();

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["word-1", "日"]);

        // No dangling edges toward skipped characters.
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].target, "日");
    }

    #[tokio::test]
    async fn test_consolidated_node_order_matches_input_order() {
        let lookup = StaticLookup::new()
            .with_entry("日", LookupEntry::new("hi", vec!["day".to_string()]))
            .with_entry("本", LookupEntry::new("hon", vec!["book".to_string()]))
            .with_entry("語", LookupEntry::new("go", vec!["language".to_string()]));

        let builder = GraphBuilder::with_lookup(Arc::new(lookup));
        let graph = builder.build_consolidated(&[nihongo(), nihon()]).await.unwrap();

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["word-1", "hi", "hon", "go", "word-2"]);
    }

    #[tokio::test]
    async fn test_lookup_timeout_degrades_to_skip() {
        /// A provider that never answers within any deadline.
        #[derive(Debug)]
        struct StalledLookup;

        #[async_trait::async_trait]
        impl KanjiLookup for StalledLookup {
            async fn lookup(&self, _character: &str) -> Result<Vec<LookupEntry>> {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }

            fn name(&self) -> &str {
                "stalled"
            }
        }

        let builder = GraphBuilder::with_lookup(Arc::new(StalledLookup))
            .lookup_timeout(Duration::from_millis(50));
        let graph = builder.build_consolidated(&[nihongo()]).await.unwrap();

        // All lookups time out: word node only, no kanji, no edges.
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[tokio::test]
    async fn test_consolidated_without_provider_is_rejected() {
        let builder = GraphBuilder::new();
        assert!(matches!(
            builder.build_consolidated(&[nihongo()]).await,
            Err(RinkuError::InvalidInput(_))
        ));
    }
}
