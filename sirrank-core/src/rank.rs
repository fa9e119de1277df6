//! Deterministic descending rankings from score maps.
//!
//! Score maps are hash maps, so two maps with identical contents can
//! iterate in different orders. Rankings sort by score descending and break
//! ties by the graph's canonical (first-seen) node order, so the same
//! scores always yield the same ranking.

use crate::ContactGraph;
use std::cmp::Ordering;
use std::collections::HashMap;

/// An ordered sequence of (node, score) pairs, best first.
pub type RankingResult = Vec<(String, f64)>;

/// Sort a score map into a deterministic descending ranking.
///
/// Only nodes present in `graph` appear; ties keep canonical graph order.
#[must_use]
pub fn rank_descending(graph: &ContactGraph, scores: &HashMap<String, f64>) -> RankingResult {
    // Collect in canonical order, then stable-sort by score only.
    let mut ranking: RankingResult = graph
        .nodes()
        .filter_map(|id| scores.get(id).map(|&score| (id.to_string(), score)))
        .collect();

    ranking.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    ranking
}

/// Build named rankings from named score maps, preserving input order.
#[must_use]
pub fn build_rankings(
    graph: &ContactGraph,
    named_scores: &[(String, HashMap<String, f64>)],
) -> Vec<(String, RankingResult)> {
    named_scores
        .iter()
        .map(|(name, scores)| (name.clone(), rank_descending(graph, scores)))
        .collect()
}
