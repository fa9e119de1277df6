//! Discrete-time stochastic SIR (Susceptible-Infected-Recovered) simulation.
//!
//! Each step is synchronous: all transitions are computed against the
//! snapshot at the start of the step and applied together, so a node
//! infected this step cannot pass the infection on until the next step.
//! Per step, every infected node tries to infect each currently susceptible
//! outgoing neighbor (independent Bernoulli trial per edge), then tries to
//! recover. Recovered is terminal.
//!
//! Randomness comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator makes whole runs reproducible.

use crate::{ContactGraph, Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Epidemic status of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Never infected (so far).
    Susceptible,
    /// Currently infectious.
    Infected,
    /// Previously infected; terminal.
    Recovered,
}

/// SIR simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SirConfig {
    /// Per-edge, per-step probability that an infected node infects a
    /// susceptible outgoing neighbor.
    pub infection_prob: f64,
    /// Per-step probability that an infected node recovers.
    pub recovery_prob: f64,
    /// Hard bound on the number of simulated steps.
    pub max_steps: usize,
}

impl Default for SirConfig {
    fn default() -> Self {
        Self {
            infection_prob: 0.1,
            recovery_prob: 0.01,
            max_steps: 100,
        }
    }
}

impl SirConfig {
    /// Validate parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProbability`] if either probability is
    /// outside [0, 1] (or NaN).
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("infection_prob", self.infection_prob),
            ("recovery_prob", self.recovery_prob),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}

/// The full record of one simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    /// One status snapshot per executed step, indexed by canonical node
    /// order. The initial assignment is not included.
    pub snapshots: Vec<Vec<Status>>,
    /// Cumulative ever-infected counts: element 0 is the seed count, then
    /// one element per executed step. Non-decreasing.
    pub cumulative_infected: Vec<usize>,
    /// Every node that was infected at any point, seeds included.
    pub ever_infected: HashSet<String>,
}

impl SimulationRun {
    /// Number of steps actually executed (may be fewer than `max_steps` if
    /// the contagion died out).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.snapshots.len()
    }

    /// Final cumulative ever-infected count.
    #[must_use]
    pub fn final_infected_count(&self) -> usize {
        self.cumulative_infected.last().copied().unwrap_or(0)
    }
}

/// Run one SIR simulation.
///
/// `seeds` start out Infected; every other node starts Susceptible. The
/// run stops after `max_steps` steps, or earlier as soon as no node is
/// Infected at the start of a step (an empty seed set therefore yields a
/// zero-step run).
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if a seed is not in the graph, or
/// [`Error::InvalidProbability`] for out-of-range probabilities. Seeds are
/// never silently fabricated.
pub fn simulate<R: Rng>(
    graph: &ContactGraph,
    seeds: &[&str],
    config: SirConfig,
    rng: &mut R,
) -> Result<SimulationRun> {
    config.validate()?;

    let pg = graph.as_petgraph();
    let n = pg.node_count();

    let adjacency: Vec<Vec<usize>> = pg
        .node_indices()
        .map(|u| graph.out_neighbors(u).map(petgraph::graph::NodeIndex::index).collect())
        .collect();

    let mut status = vec![Status::Susceptible; n];
    let mut ever = vec![false; n];
    for &seed in seeds {
        let idx = graph
            .index_of(seed)
            .ok_or_else(|| Error::NodeNotFound(seed.to_string()))?;
        status[idx.index()] = Status::Infected;
        ever[idx.index()] = true;
    }

    let mut ever_count = ever.iter().filter(|&&e| e).count();
    let mut cumulative_infected = vec![ever_count];
    let mut snapshots = Vec::new();

    for _ in 0..config.max_steps {
        if !status.contains(&Status::Infected) {
            break; // contagion died out
        }

        // Read old snapshot, write new one.
        let mut next = status.clone();
        for u in 0..n {
            if status[u] != Status::Infected {
                continue;
            }
            for &v in &adjacency[u] {
                if status[v] == Status::Susceptible && rng.random::<f64>() < config.infection_prob
                {
                    if !ever[v] {
                        ever[v] = true;
                        ever_count += 1;
                    }
                    next[v] = Status::Infected;
                }
            }
            if rng.random::<f64>() < config.recovery_prob {
                next[u] = Status::Recovered;
            }
        }

        status = next;
        snapshots.push(status.clone());
        cumulative_infected.push(ever_count);
    }

    let ever_infected = pg
        .node_indices()
        .filter(|idx| ever[idx.index()])
        .map(|idx| pg[idx].clone())
        .collect();

    Ok(SimulationRun {
        snapshots,
        cumulative_infected,
        ever_infected,
    })
}
