//! Neighbor-degree h-index.
//!
//! The citation h-index transplanted to graph structure: a node scores `h`
//! if at least `h` of its outgoing neighbors have total degree >= `h`.
//! High h-index means the node sits next to many well-connected nodes, a
//! cheap proxy for spreading power (Lü et al., "The H-index of a network
//! node", 2016).
//!
//! Neighbor set is the node's *successors*; the degree counted for each
//! neighbor is total degree (in + out).

use crate::ContactGraph;
use std::collections::HashMap;

/// Compute the neighbor-degree h-index for all nodes.
///
/// Returns a map of node id -> h. A node with no outgoing neighbors
/// scores 0, and no node can score above its out-neighbor count.
#[must_use]
pub fn h_index(graph: &ContactGraph) -> HashMap<String, usize> {
    let pg = graph.as_petgraph();
    let mut result = HashMap::with_capacity(pg.node_count());

    for u in pg.node_indices() {
        let mut degrees: Vec<usize> = graph.out_neighbors(u).map(|v| graph.degree(v)).collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));

        let mut h = 0;
        for (i, &degree) in degrees.iter().enumerate() {
            if degree >= i + 1 {
                h = i + 1;
            } else {
                break;
            }
        }

        result.insert(pg[u].clone(), h);
    }

    result
}
