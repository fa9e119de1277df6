//! Directed contact graph built from whitespace edge lists, using petgraph.

use crate::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A directed, unweighted, simple graph over opaque string node identifiers.
///
/// Uses petgraph's directed graph internally for efficient traversal, with a
/// side index from identifier to node index. Node indices follow first-seen
/// insertion order, which doubles as the canonical tie-break order for
/// rankings.
///
/// Duplicate edge insertions are idempotent; self-loops are allowed.
///
/// # Example
///
/// ```rust
/// use sirrank_core::ContactGraph;
///
/// let mut g = ContactGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("a", "b"); // idempotent
/// g.add_edge("b", "c");
///
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactGraph {
    /// The underlying directed graph. Node weights are the identifiers.
    graph: DiGraph<String, ()>,

    /// Map from node identifier to node index.
    node_index: HashMap<String, NodeIndex>,
}

/// What the edge-list loader saw while reading a file.
///
/// Malformed lines are skipped rather than fatal, but callers that care
/// about silent data loss can inspect (and log) the counts here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeListReport {
    /// Data lines inspected (after the skipped header lines).
    pub lines_read: usize,
    /// Edges actually inserted into the graph.
    pub edges_added: usize,
    /// Lines that did not split into exactly two tokens.
    pub malformed_lines: usize,
    /// Well-formed lines naming an edge that already existed.
    pub duplicate_edges: usize,
}

impl ContactGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Create a graph with estimated capacity.
    #[must_use]
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_index: HashMap::with_capacity(nodes),
        }
    }

    /// Load a graph from a whitespace edge-list file.
    ///
    /// The first `skip_lines` lines are discarded unconditionally (header /
    /// metadata). Every following line is split on whitespace; lines with
    /// exactly two tokens become a directed edge `src -> dst`, all other
    /// lines are skipped and counted in the returned [`EdgeListReport`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be opened or read.
    pub fn from_edge_list_file(
        path: impl AsRef<Path>,
        skip_lines: usize,
    ) -> Result<(Self, EdgeListReport)> {
        let file = File::open(path)?;
        Self::from_edge_list_reader(BufReader::new(file), skip_lines)
    }

    /// Load a graph from any buffered reader of edge-list lines.
    ///
    /// Same semantics as [`ContactGraph::from_edge_list_file`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if a line cannot be read.
    pub fn from_edge_list_reader<R: BufRead>(
        reader: R,
        skip_lines: usize,
    ) -> Result<(Self, EdgeListReport)> {
        let mut graph = Self::new();
        let mut report = EdgeListReport::default();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if lineno < skip_lines {
                continue;
            }
            report.lines_read += 1;

            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(src), Some(dst), None) => {
                    if graph.add_edge(src, dst) {
                        report.edges_added += 1;
                    } else {
                        report.duplicate_edges += 1;
                    }
                }
                _ => report.malformed_lines += 1,
            }
        }

        if report.malformed_lines > 0 {
            tracing::warn!(
                malformed = report.malformed_lines,
                "skipped malformed edge-list lines"
            );
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "edge list loaded"
        );

        Ok((graph, report))
    }

    /// Get or create the node with the given identifier.
    pub fn add_node(&mut self, id: impl Into<String>) -> NodeIndex {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.node_index.insert(id, idx);
        idx
    }

    /// Add a directed edge, creating endpoints as needed.
    ///
    /// Returns `true` if the edge was new, `false` if it already existed
    /// (the graph stays simple either way).
    pub fn add_edge(&mut self, src: impl Into<String>, dst: impl Into<String>) -> bool {
        let src_idx = self.add_node(src);
        let dst_idx = self.add_node(dst);

        if self.graph.find_edge(src_idx, dst_idx).is_some() {
            return false;
        }
        self.graph.add_edge(src_idx, dst_idx, ());
        true
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of (distinct) directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether a node with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Node index for an identifier, if present.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Identifier stored at a node index.
    #[must_use]
    pub fn node_id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Iterate node identifiers in canonical (first-seen) order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Outgoing neighbor indices of a node.
    pub fn out_neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    /// Number of outgoing edges of a node.
    #[must_use]
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .count()
    }

    /// Number of incoming edges of a node.
    #[must_use]
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .count()
    }

    /// Total degree (in + out). A self-loop counts twice.
    #[must_use]
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.in_degree(idx) + self.out_degree(idx)
    }

    /// Access the underlying petgraph structure.
    #[must_use]
    pub fn as_petgraph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}
