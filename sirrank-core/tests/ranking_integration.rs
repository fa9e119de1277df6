//! Integration tests for the ranking algorithms and the comparison
//! pipeline on realistic graph structures.

use sirrank_core::algo::{
    closeness_centrality, core_number, degree_centrality, h_index, leader_rank, pagerank,
    ClosenessConfig, LeaderRankConfig, PageRankConfig, RankingStrategy,
};
use sirrank_core::compare::{compare, CompareConfig};
use sirrank_core::rank::rank_descending;
use sirrank_core::sir::SirConfig;
use sirrank_core::ContactGraph;

/// Two-tier broadcast network.
///
/// ```text
///        alice
///       /  |  \
///      v   v   v
///    bob carol dave
///      \   |   /
///       v  v  v
///         eve
/// ```
fn broadcast_network() -> ContactGraph {
    let mut g = ContactGraph::new();
    g.add_edge("alice", "bob");
    g.add_edge("alice", "carol");
    g.add_edge("alice", "dave");
    g.add_edge("bob", "eve");
    g.add_edge("carol", "eve");
    g.add_edge("dave", "eve");
    g
}

fn chain_graph(length: usize) -> ContactGraph {
    let mut g = ContactGraph::new();
    for i in 0..length {
        g.add_edge(format!("n{i}"), format!("n{}", i + 1));
    }
    g
}

fn complete_graph(n: usize) -> ContactGraph {
    let mut g = ContactGraph::new();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                g.add_edge(format!("n{i}"), format!("n{j}"));
            }
        }
    }
    g
}

// ============================================================================
// Individual metrics
// ============================================================================

#[test]
fn test_degree_broadcast_network() {
    let g = broadcast_network();
    let degrees = degree_centrality(&g);

    assert_eq!(degrees["alice"].out_degree, 3);
    assert_eq!(degrees["alice"].in_degree, 0);
    assert_eq!(degrees["eve"].in_degree, 3);
    assert_eq!(degrees["eve"].out_degree, 0);
}

#[test]
fn test_closeness_broadcast_network() {
    let g = broadcast_network();
    let scores = closeness_centrality(&g, ClosenessConfig::default());

    // alice reaches all four others (three in one hop, eve in two);
    // eve reaches nobody.
    assert!(scores["alice"] > scores["bob"]);
    assert!((scores["eve"]).abs() < 1e-9);
}

#[test]
fn test_pagerank_sink_collects_mass() {
    let g = broadcast_network();
    let scores = pagerank(&g, PageRankConfig::default());

    let eve = scores["eve"];
    for node in ["alice", "bob", "carol", "dave"] {
        assert!(eve > scores[node], "eve={eve} vs {node}={}", scores[node]);
    }
}

#[test]
fn test_leader_rank_broadcast_network() {
    let g = broadcast_network();
    let scores = leader_rank(&g, LeaderRankConfig::default());

    let total: f64 = scores.values().sum();
    assert!((total - 1.0).abs() < 1e-9);

    // eve only absorbs; the middle tier forwards most of what it gets.
    assert!(scores["eve"] > scores["alice"]);
}

#[test]
fn test_h_index_broadcast_network() {
    let g = broadcast_network();
    let scores = h_index(&g);

    // alice's three neighbors each have degree 2, so h = 2.
    assert_eq!(scores["alice"], 2);
    // bob's single neighbor eve has degree 3, so h = 1.
    assert_eq!(scores["bob"], 1);
    assert_eq!(scores["eve"], 0);
}

#[test]
fn test_core_number_complete_graph() {
    let g = complete_graph(5);
    let core = core_number(&g);

    // Every node has undirected-view degree 8; the whole graph peels at 8.
    for i in 0..5 {
        assert_eq!(core[&format!("n{i}")], 8);
    }
}

#[test]
fn test_chain_endpoints_rank_low_on_closeness() {
    let g = chain_graph(10);
    let scores = closeness_centrality(
        &g,
        ClosenessConfig {
            undirected: true,
            ..ClosenessConfig::default()
        },
    );

    let middle = scores["n5"];
    let end = scores["n0"];
    assert!(middle > end, "middle={middle} end={end}");
}

// ============================================================================
// End-to-end pipeline
// ============================================================================

#[test]
fn test_full_pipeline_all_strategies() {
    let g = broadcast_network();

    let rankings: Vec<_> = RankingStrategy::ALL
        .iter()
        .map(|s| (s.name().to_string(), rank_descending(&g, &s.compute(&g))))
        .collect();

    // Every ranking covers every node exactly once.
    for (name, ranking) in &rankings {
        assert_eq!(ranking.len(), g.node_count(), "{name}");
    }

    let config = CompareConfig {
        top_k: 2,
        sir: SirConfig {
            infection_prob: 0.8,
            recovery_prob: 0.3,
            max_steps: 50,
        },
        seed: 42,
    };
    let record = compare(&g, &rankings, &config).unwrap();

    assert_eq!(record.series.len(), RankingStrategy::ALL.len());
    for series in &record.series {
        assert_eq!(series.seed_count, 2);
        // Cumulative series are non-decreasing and bounded by node count.
        for pair in series.cumulative_infected.windows(2) {
            assert!(pair[0] <= pair[1], "{}", series.name);
        }
        assert!(series.cumulative_infected.len() <= config.sir.max_steps + 1);
        assert!(*series.cumulative_infected.last().unwrap() <= g.node_count());
    }
}

#[test]
fn test_pipeline_deterministic_end_to_end() {
    let g = chain_graph(20);

    let run = |seed: u64| {
        let rankings: Vec<_> = RankingStrategy::ALL
            .iter()
            .map(|s| (s.name().to_string(), rank_descending(&g, &s.compute(&g))))
            .collect();
        let config = CompareConfig {
            top_k: 5,
            sir: SirConfig {
                infection_prob: 0.5,
                recovery_prob: 0.1,
                max_steps: 40,
            },
            seed,
        };
        compare(&g, &rankings, &config).unwrap()
    };

    let first = run(7);
    let second = run(7);
    for (a, b) in first.series.iter().zip(second.series.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.cumulative_infected, b.cumulative_infected);
    }
}
