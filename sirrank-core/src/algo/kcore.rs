//! k-shell (core number) decomposition.
//!
//! The k-core of a graph is the maximal subgraph in which every node has
//! degree at least k; a node's core number is the largest k for which it
//! survives. Computed by iterative peeling: repeatedly remove the node of
//! minimum remaining degree. Edges are treated as undirected and degree is
//! total degree (in + out).

use crate::ContactGraph;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Compute the core number of every node.
///
/// Returns a map of node id -> core number. Isolated nodes score 0.
#[must_use]
pub fn core_number(graph: &ContactGraph) -> HashMap<String, usize> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return HashMap::new();
    }

    // Undirected view: each directed edge contributes to both endpoints.
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for edge in pg.raw_edges() {
        adjacency[edge.source().index()].push(edge.target().index());
        adjacency[edge.target().index()].push(edge.source().index());
    }

    let mut deg: Vec<usize> = adjacency.iter().map(Vec::len).collect();
    let mut removed = vec![false; n];
    let mut core = vec![0; n];

    // Min-heap of (degree, node) with lazy invalidation on stale entries.
    let mut heap: BinaryHeap<Reverse<(usize, usize)>> =
        deg.iter().enumerate().map(|(v, &d)| Reverse((d, v))).collect();

    let mut k = 0;
    while let Some(Reverse((d, v))) = heap.pop() {
        if removed[v] || d != deg[v] {
            continue;
        }
        removed[v] = true;
        k = k.max(d);
        core[v] = k;

        for &u in &adjacency[v] {
            if !removed[u] && deg[u] > 0 {
                deg[u] -= 1;
                heap.push(Reverse((deg[u], u)));
            }
        }
    }

    pg.node_indices()
        .map(|idx| (pg[idx].clone(), core[idx.index()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_node_core_zero() {
        let mut g = ContactGraph::new();
        g.add_node("x");
        assert_eq!(core_number(&g)["x"], 0);
    }

    #[test]
    fn test_chain_is_one_core() {
        let mut g = ContactGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("c", "d");

        let core = core_number(&g);
        for node in ["a", "b", "c", "d"] {
            assert_eq!(core[node], 1, "{node}");
        }
    }

    #[test]
    fn test_triangle_with_pendant() {
        let mut g = ContactGraph::new();
        // Triangle a-b-c plus pendant d hanging off a.
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("c", "a");
        g.add_edge("a", "d");

        let core = core_number(&g);
        assert_eq!(core["a"], 2);
        assert_eq!(core["b"], 2);
        assert_eq!(core["c"], 2);
        assert_eq!(core["d"], 1);
    }

    #[test]
    fn test_complete_graph_core() {
        let mut g = ContactGraph::new();
        let names = ["a", "b", "c", "d"];
        for x in names {
            for y in names {
                if x != y {
                    g.add_edge(x, y);
                }
            }
        }

        let core = core_number(&g);
        // Every node has undirected-view degree 6; all peel at k = 6.
        for node in names {
            assert_eq!(core[node], 6, "{node}");
        }
    }

    #[test]
    fn test_empty_graph() {
        let g = ContactGraph::new();
        assert!(core_number(&g).is_empty());
    }
}
