//! Closeness centrality: proximity to all other nodes.
//!
//! Measures how quickly something spreading from a node can reach the rest
//! of the graph. Classic closeness breaks on disconnected graphs (infinite
//! distances), so the harmonic variant — sum of inverse distances, with
//! unreachable nodes contributing zero — is the default here.

use crate::ContactGraph;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, VecDeque};

/// Configuration for closeness centrality.
#[derive(Debug, Clone, Copy)]
pub struct ClosenessConfig {
    /// Normalize scores to [0, 1] by dividing by `n - 1`.
    pub normalized: bool,
    /// Treat edges as undirected.
    pub undirected: bool,
    /// Use harmonic closeness (recommended for disconnected graphs).
    pub harmonic: bool,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self {
            normalized: true,
            undirected: false,
            harmonic: true, // robust to disconnected components
        }
    }
}

/// Compute closeness centrality for all nodes.
///
/// BFS from every node, so O(VE) time overall.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(graph: &ContactGraph, config: ClosenessConfig) -> HashMap<String, f64> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n < 2 {
        return pg.node_indices().map(|idx| (pg[idx].clone(), 0.0)).collect();
    }

    let mut result = HashMap::with_capacity(n);

    for source in pg.node_indices() {
        let distances = bfs_distances(pg, source, config.undirected);

        let closeness = if config.harmonic {
            distances
                .iter()
                .enumerate()
                .filter(|(i, &d)| *i != source.index() && d > 0)
                .map(|(_, &d)| 1.0 / f64::from(d))
                .sum()
        } else {
            let reachable: Vec<i32> = distances
                .iter()
                .enumerate()
                .filter(|(i, &d)| *i != source.index() && d > 0)
                .map(|(_, &d)| d)
                .collect();

            if reachable.is_empty() {
                0.0
            } else {
                let total_dist: i32 = reachable.iter().sum();
                reachable.len() as f64 / f64::from(total_dist)
            }
        };

        let score = if config.normalized {
            closeness / (n - 1) as f64
        } else {
            closeness
        };

        result.insert(pg[source].clone(), score);
    }

    result
}

/// BFS distances from `source`. -1 means unreachable, 0 means self.
fn bfs_distances(pg: &DiGraph<String, ()>, source: NodeIndex, undirected: bool) -> Vec<i32> {
    let mut dist = vec![-1_i32; pg.node_count()];
    dist[source.index()] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let v_dist = dist[v.index()];

        let neighbors: Vec<NodeIndex> = if undirected {
            pg.neighbors_undirected(v).collect()
        } else {
            pg.neighbors_directed(v, petgraph::Direction::Outgoing).collect()
        };

        for w in neighbors {
            if dist[w.index()] < 0 {
                dist[w.index()] = v_dist + 1;
                queue.push_back(w);
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closeness_star_directed() {
        let mut g = ContactGraph::new();
        g.add_edge("hub", "a");
        g.add_edge("hub", "b");
        g.add_edge("hub", "c");

        let scores = closeness_centrality(&g, ClosenessConfig::default());

        // Hub reaches everyone in one hop; leaves reach no one.
        assert!(scores["hub"] > 0.0);
        assert!((scores["a"]).abs() < 1e-9);
    }

    #[test]
    fn test_closeness_line_undirected() {
        let mut g = ContactGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");

        let config = ClosenessConfig {
            normalized: false,
            undirected: true,
            harmonic: true,
        };
        let scores = closeness_centrality(&g, config);

        // Harmonic: b = 1 + 1 = 2, a = 1 + 1/2 = 1.5 = c
        assert!(scores["b"] > scores["a"]);
        assert!((scores["a"] - scores["c"]).abs() < 1e-9);
    }

    #[test]
    fn test_closeness_disconnected() {
        let mut g = ContactGraph::new();
        g.add_edge("a", "b");
        g.add_edge("c", "d");

        let scores = closeness_centrality(&g, ClosenessConfig::default());
        // Harmonic handles the missing paths: a still gets credit for b.
        assert!(scores["a"] > 0.0);
    }

    #[test]
    fn test_closeness_singleton() {
        let mut g = ContactGraph::new();
        g.add_node("only");
        let scores = closeness_centrality(&g, ClosenessConfig::default());
        assert!((scores["only"]).abs() < 1e-9);
    }
}
