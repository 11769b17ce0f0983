//! Graph construction from word records.
//!
//! [`GraphBuilder`](builder::GraphBuilder) expands word records into a
//! deduplicated node/edge [`Graph`](node::Graph) linking each word to its
//! constituent kanji. Graphs are built fresh per call, never mutated after
//! return, and serialize to the fixed `{nodes, edges}` wire shape.

pub mod builder;
pub mod node;

pub use builder::GraphBuilder;
pub use node::{EdgeType, Graph, GraphEdge, GraphNode};
