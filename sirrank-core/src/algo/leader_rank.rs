//! LeaderRank influence scoring.
//!
//! # Intuition
//!
//! LeaderRank distributes a conserved "score mass" across outgoing edges over
//! repeated rounds, like PageRank, but stabilizes the iteration with a
//! synthetic *ground* node instead of uniform teleportation.
//!
//! # This variant
//!
//! This implementation keeps two deliberate departures from the textbook
//! algorithm (Lü et al. 2011):
//!
//! - The ground node is connected **one way only**: ground → every real
//!   node. No real node links back to ground, so the ground never receives
//!   distributed mass.
//! - The damping adjustment is applied to the **ground node only**; real
//!   nodes are never damped.
//!
//! Textbook LeaderRank links the ground bidirectionally and uses no damping
//! at all. Callers wanting the textbook variant should not get it silently
//! from here.
//!
//! A node with no outgoing edges keeps nothing and passes nothing on: its
//! mass leaves the system. The final scores are renormalized to sum to 1.0
//! over the real nodes, so the leak only shifts relative weight.

use crate::ContactGraph;
use std::collections::HashMap;

/// LeaderRank configuration.
#[derive(Debug, Clone, Copy)]
pub struct LeaderRankConfig {
    /// Fixed number of power-iteration rounds.
    pub iterations: usize,
    /// Damping factor applied to the ground node's score each round.
    pub damping: f64,
}

impl Default for LeaderRankConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            damping: 0.85,
        }
    }
}

/// Compute LeaderRank scores for all nodes.
///
/// Returns a map of node id -> score. Scores are non-negative and sum to
/// 1.0 over the real nodes (the ground node is dropped before
/// normalization). An empty graph yields an empty map.
///
/// Deterministic: depends only on graph topology and the config.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn leader_rank(graph: &ContactGraph, config: LeaderRankConfig) -> HashMap<String, f64> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let adjacency: Vec<Vec<usize>> = pg
        .node_indices()
        .map(|u| graph.out_neighbors(u).map(petgraph::graph::NodeIndex::index).collect())
        .collect();

    // Index n is the ground node. Everything starts at 1.0, ground included.
    let mut scores = vec![1.0; n + 1];

    for _ in 0..config.iterations {
        let mut next = vec![0.0; n + 1];

        // Synchronous update: distribution reads only the previous round.
        for (u, outs) in adjacency.iter().enumerate() {
            if outs.is_empty() {
                continue; // dangling mass is discarded
            }
            let share = scores[u] / outs.len() as f64;
            for &v in outs {
                next[v] += share;
            }
        }

        // Ground links to every real node and splits its score evenly.
        let ground_share = scores[n] / n as f64;
        for slot in next.iter_mut().take(n) {
            *slot += ground_share;
        }

        // Damping on the ground node only. Nothing links back to ground, so
        // its distributed-in mass is always zero and this pins it at
        // 1 - damping after the first round.
        next[n] = (1.0 - config.damping) + config.damping * next[n];

        scores = next;
    }

    scores.truncate(n); // drop the ground node

    let total: f64 = scores.iter().sum();
    if total > 0.0 {
        for score in &mut scores {
            *score /= total;
        }
    }

    pg.node_indices()
        .map(|idx| (pg[idx].clone(), scores[idx.index()]))
        .collect()
}
