//! Degree centrality: the simplest centrality measure.
//!
//! Counts connections. For directed graphs three variants exist: in-degree
//! (prestige), out-degree (activity), and total. Raw degree depends on
//! graph size, so normalized values divide by `n - 1`.

use crate::ContactGraph;
use std::collections::HashMap;

/// Degree centrality result for a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeCentrality {
    /// Number of incoming edges.
    pub in_degree: usize,
    /// Number of outgoing edges.
    pub out_degree: usize,
    /// Normalized in-degree (0 to 1).
    pub in_normalized: f64,
    /// Normalized out-degree (0 to 1).
    pub out_normalized: f64,
}

impl DegreeCentrality {
    /// Total degree (in + out).
    #[must_use]
    pub fn total(&self) -> usize {
        self.in_degree + self.out_degree
    }

    /// Normalized total degree.
    #[must_use]
    pub fn total_normalized(&self) -> f64 {
        self.in_normalized + self.out_normalized
    }
}

/// Compute degree centrality for all nodes.
///
/// # Example
///
/// ```
/// use sirrank_core::ContactGraph;
/// use sirrank_core::algo::degree_centrality;
///
/// let mut g = ContactGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("a", "c");
/// g.add_edge("b", "c");
///
/// let degrees = degree_centrality(&g);
/// assert_eq!(degrees["a"].out_degree, 2);
/// assert_eq!(degrees["a"].in_degree, 0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(graph: &ContactGraph) -> HashMap<String, DegreeCentrality> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let norm_factor = if n > 1 { (n - 1) as f64 } else { 1.0 };
    let mut result = HashMap::with_capacity(n);

    for idx in pg.node_indices() {
        let in_degree = graph.in_degree(idx);
        let out_degree = graph.out_degree(idx);

        result.insert(
            pg[idx].clone(),
            DegreeCentrality {
                in_degree,
                out_degree,
                in_normalized: in_degree as f64 / norm_factor,
                out_normalized: out_degree as f64 / norm_factor,
            },
        );
    }

    result
}
