//! Influence ranking for directed graphs, validated by epidemic simulation.
//!
//! Nodes of a directed contact graph are ranked by several influence
//! estimates (LeaderRank, neighbor-degree h-index, degree / closeness /
//! `PageRank` centralities, k-shell), and the rankings are compared
//! empirically: seed a stochastic SIR process with each ranking's top
//! nodes and watch how far the infection spreads.
//!
//! # Example
//!
//! ```rust
//! use sirrank_core::{compare, rank, ContactGraph};
//! use sirrank_core::algo::RankingStrategy;
//! use sirrank_core::compare::CompareConfig;
//!
//! let mut g = ContactGraph::new();
//! g.add_edge("a", "b");
//! g.add_edge("b", "c");
//! g.add_edge("c", "a");
//!
//! // Rank by every strategy, then race the rankings.
//! let rankings: Vec<_> = RankingStrategy::ALL
//!     .iter()
//!     .map(|s| (s.name().to_string(), rank::rank_descending(&g, &s.compute(&g))))
//!     .collect();
//!
//! let record = compare::compare(&g, &rankings, &CompareConfig::default()).unwrap();
//! assert_eq!(record.series.len(), 6);
//! ```
//!
//! # Conventions
//!
//! - **Errors**: [`Error`] / [`Result`] via `thiserror`; nothing panics on
//!   degenerate graphs.
//! - **Randomness**: always an explicit `rand::Rng` parameter; pass a
//!   seeded `rand_xorshift::XorShiftRng` for reproducible runs.
//! - **Logging**: `tracing` macros, no output unless a subscriber is set.

pub mod algo;
pub mod compare;
mod error;
mod graph;
pub mod rank;
pub mod sir;

pub use error::{Error, Result};
pub use graph::{ContactGraph, EdgeListReport};

// Re-export petgraph for advanced graph operations.
pub use petgraph;
