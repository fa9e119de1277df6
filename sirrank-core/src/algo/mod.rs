//! Influence-ranking algorithms.
//!
//! Six strategies share the uniform contract "graph in, node -> score map
//! out", collected behind [`RankingStrategy`] so callers enumerate a closed
//! set instead of passing strategy names around as strings.

mod closeness;
mod degree;
mod h_index;
mod kcore;
mod leader_rank;
mod pagerank;

pub use closeness::{closeness_centrality, ClosenessConfig};
pub use degree::{degree_centrality, DegreeCentrality};
pub use h_index::h_index;
pub use kcore::core_number;
pub use leader_rank::{leader_rank, LeaderRankConfig};
pub use pagerank::{pagerank, PageRankConfig};

use crate::ContactGraph;
use std::collections::HashMap;
use std::fmt;

/// The closed set of ranking strategies.
///
/// Every variant computes a full node -> score map over the same graph;
/// higher scores mean more estimated influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingStrategy {
    /// Normalized total-degree centrality.
    Degree,
    /// Harmonic closeness centrality.
    Closeness,
    /// Damped `PageRank`.
    PageRank,
    /// LeaderRank power iteration.
    LeaderRank,
    /// Neighbor-degree h-index.
    HIndex,
    /// k-shell core number.
    KShell,
}

impl RankingStrategy {
    /// All strategies, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Degree,
        Self::Closeness,
        Self::PageRank,
        Self::LeaderRank,
        Self::HIndex,
        Self::KShell,
    ];

    /// Stable display name, used as the series label in comparisons.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Degree => "Centrality",
            Self::Closeness => "Closeness",
            Self::PageRank => "PageRank",
            Self::LeaderRank => "LeaderRank",
            Self::HIndex => "H-index",
            Self::KShell => "K-Shell",
        }
    }

    /// Compute this strategy's score map with default parameters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(self, graph: &ContactGraph) -> HashMap<String, f64> {
        match self {
            Self::Degree => degree_centrality(graph)
                .into_iter()
                .map(|(id, d)| (id, d.total_normalized()))
                .collect(),
            Self::Closeness => closeness_centrality(graph, ClosenessConfig::default()),
            Self::PageRank => pagerank(graph, PageRankConfig::default()),
            Self::LeaderRank => leader_rank(graph, LeaderRankConfig::default()),
            Self::HIndex => h_index(graph)
                .into_iter()
                .map(|(id, h)| (id, h as f64))
                .collect(),
            Self::KShell => core_number(graph)
                .into_iter()
                .map(|(id, k)| (id, k as f64))
                .collect(),
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_strategies_cover_all_nodes() {
        let mut g = ContactGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("c", "a");
        g.add_edge("a", "d");

        for strategy in RankingStrategy::ALL {
            let scores = strategy.compute(&g);
            assert_eq!(scores.len(), g.node_count(), "{strategy}");
            assert!(scores.values().all(|s| s.is_finite()), "{strategy}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = RankingStrategy::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RankingStrategy::ALL.len());
    }
}
