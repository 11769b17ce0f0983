//! Graph value types and their wire shape.
//!
//! The serialized shape is a fixed contract consumed by the visualization
//! layer: `{ "nodes": [...], "edges": [...] }`. Node ids are synthetic
//! strings under every identity strategy (`word-<id>`, `kanji-<id>`, or an
//! external slug), so switching strategies never changes the schema.

use serde::{Deserialize, Serialize};

/// One node of a display graph.
///
/// The `type` tag distinguishes word nodes from kanji nodes; each variant
/// carries the display fields of the record it came from. Ids are unique
/// within one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GraphNode {
    /// A vocabulary word.
    Word {
        /// Synthetic display id, `word-<record id>`.
        id: String,
        /// The word's surface form.
        label: String,
        /// Kana reading.
        reading: String,
        /// English meaning.
        meaning: String,
    },
    /// A kanji character.
    Kanji {
        /// Synthetic display id: `kanji-<record id>` under the local
        /// strategy, the external slug under the consolidated strategy.
        id: String,
        /// The glyph itself.
        label: String,
        /// Meanings, one element per contributing source.
        meanings: Vec<String>,
        /// True when more than one external entry was merged into this
        /// node.
        is_consolidated: bool,
    },
}

impl GraphNode {
    /// The node's display id.
    pub fn id(&self) -> &str {
        match self {
            GraphNode::Word { id, .. } => id,
            GraphNode::Kanji { id, .. } => id,
        }
    }

    /// The node's display label.
    pub fn label(&self) -> &str {
        match self {
            GraphNode::Word { label, .. } => label,
            GraphNode::Kanji { label, .. } => label,
        }
    }

    /// Check if this is a word node.
    pub fn is_word(&self) -> bool {
        matches!(self, GraphNode::Word { .. })
    }

    /// Check if this is a kanji node.
    pub fn is_kanji(&self) -> bool {
        matches!(self, GraphNode::Kanji { .. })
    }
}

/// The relation carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// The source word contains the target kanji.
    Contains,
}

/// One directed edge of a display graph.
///
/// `source` and `target` always reference ids present in the same graph's
/// node list; the builder never emits a dangling edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Id of the source node.
    pub source: String,
    /// Id of the target node.
    pub target: String,
    /// Relation tag.
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

impl GraphEdge {
    /// Create a `contains` edge between two node ids.
    pub fn contains<S: Into<String>, T: Into<String>>(source: S, target: T) -> Self {
        GraphEdge {
            source: source.into(),
            target: target.into(),
            edge_type: EdgeType::Contains,
        }
    }
}

/// A display graph: nodes and edges in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes, in emission order.
    pub nodes: Vec<GraphNode>,
    /// Edges, in emission order.
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Check if the graph has no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Find a node by its display id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Number of word nodes.
    pub fn word_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_word()).count()
    }

    /// Number of kanji nodes.
    pub fn kanji_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_kanji()).count()
    }
}
