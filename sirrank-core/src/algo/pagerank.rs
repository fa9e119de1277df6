//! `PageRank` centrality.
//!
//! Damped power iteration with dangling-node mass redistributed uniformly.
//! Scores sum to 1.0.

use crate::ContactGraph;
use std::collections::HashMap;

/// `PageRank` configuration.
#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    pub damping: f64,
    /// Maximum iterations before stopping.
    pub max_iterations: usize,
    /// Convergence tolerance (L1 norm of score changes).
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Compute `PageRank` for all nodes.
///
/// Returns a map of node id -> score, scores summing to 1.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pagerank(graph: &ContactGraph, config: PageRankConfig) -> HashMap<String, f64> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let n_f64 = n as f64;
    let adjacency: Vec<Vec<usize>> = pg
        .node_indices()
        .map(|u| graph.out_neighbors(u).map(petgraph::graph::NodeIndex::index).collect())
        .collect();

    let mut scores = vec![1.0 / n_f64; n];
    let mut next = vec![0.0; n];

    for _ in 0..config.max_iterations {
        let dangling_sum: f64 = adjacency
            .iter()
            .enumerate()
            .filter(|(_, outs)| outs.is_empty())
            .map(|(u, _)| scores[u])
            .sum();
        let dangling_contrib = config.damping * dangling_sum / n_f64;
        let teleport = (1.0 - config.damping) / n_f64;
        next.fill(teleport + dangling_contrib);

        for (u, outs) in adjacency.iter().enumerate() {
            if !outs.is_empty() {
                let share = config.damping * scores[u] / outs.len() as f64;
                for &v in outs {
                    next[v] += share;
                }
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();
        std::mem::swap(&mut scores, &mut next);
        if diff < config.tolerance {
            break;
        }
    }

    pg.node_indices()
        .map(|idx| (pg[idx].clone(), scores[idx.index()]))
        .collect()
}
