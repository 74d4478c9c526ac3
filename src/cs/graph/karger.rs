use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::disjoint_set::DisjointSet;
use super::multigraph::Graph;
use crate::error::{GraphError, Result};

/// Edges crossing the two sides of a candidate cut.
///
/// Parallel edges are kept with their multiplicity, so `size` is the
/// number of edge instances that cross.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut<V> {
    edges: Vec<(V, V)>,
}

impl<V> Cut<V>
where
    V: Hash + Eq + Clone,
{
    /// Number of crossing edges, counting parallel edges separately.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<(V, V)> {
        self.edges
    }

    /// Number of distinct unordered endpoint pairs among the crossing edges.
    pub fn distinct_pairs(&self) -> usize {
        let mut seen: HashSet<(&V, &V)> = HashSet::with_capacity(self.edges.len());
        for (u, v) in &self.edges {
            if !seen.contains(&(v, u)) {
                seen.insert((u, v));
            }
        }
        seen.len()
    }
}

/// Runs one trial of Karger's random contraction.
///
/// The edge list is shuffled with `rng` and contracted from the back until
/// two components remain; the unused edges whose endpoints ended up in
/// different components form the returned cut. A single trial finds a
/// minimum cut with probability at least 2 / (n(n-1)).
///
/// Graphs with fewer than two nodes yield an empty cut. On a disconnected
/// graph the edges run out before two components remain and the cut holds
/// whatever crossing edges are left (usually none).
///
/// # Examples
/// ```
/// use karger_cut::{karger, Graph};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let graph = Graph::from_edges(vec![(1, 2)]);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let cut = karger::min_cut(&graph, &mut rng).unwrap();
/// assert_eq!(cut.edges(), &[(1, 2)]);
/// ```
///
/// # Complexity
/// * Time: O(E α(V))
/// * Space: O(V + E)
///
/// # Errors
/// * `NodeNotFound` if an edge endpoint is missing from the node set
pub fn min_cut<V, R>(graph: &Graph<V>, rng: &mut R) -> Result<Cut<V>>
where
    V: Hash + Eq + Clone + Debug,
    R: Rng + ?Sized,
{
    let n = graph.node_count();
    if n < 2 {
        return Ok(Cut { edges: Vec::new() });
    }

    let mut ds = DisjointSet::with_capacity(n);
    ds.make_set(graph.nodes().iter().cloned());

    let mut stack = graph.edges().to_vec();
    stack.shuffle(rng);

    let target = n - 2;
    let mut contractions = 0;
    while contractions < target {
        let Some((u, v)) = stack.pop() else {
            log::debug!(
                "edges exhausted after {contractions} of {target} contractions; graph is disconnected"
            );
            break;
        };
        if ds.union(&u, &v)? {
            contractions += 1;
        }
    }

    let mut crossing = Vec::new();
    for (u, v) in stack {
        if !ds.same_set(&u, &v)? {
            crossing.push((u, v));
        }
    }

    log::debug!(
        "contraction trial on {} nodes / {} edges: {} contractions, cut size {}",
        n,
        graph.edge_count(),
        contractions,
        crossing.len()
    );
    Ok(Cut { edges: crossing })
}

/// Number of trials after which best-of-trials misses the minimum cut with
/// probability at most 1/n: ⌈n(n-1)/2 · ln n⌉.
pub fn recommended_trials(n: usize) -> usize {
    if n < 2 {
        return 1;
    }
    let n = n as f64;
    let trials = (n * (n - 1.0) / 2.0 * n.ln()).ceil();
    (trials as usize).max(1)
}

/// Runs `trials` independent contraction trials and keeps the smallest cut.
///
/// Ties keep the earliest trial. Stops early on an empty cut, since
/// nothing can beat it.
///
/// # Errors
/// * `InvalidInput` if `trials` is zero
/// * `NodeNotFound` as for [`min_cut`]
pub fn karger_min_cut<V, R>(graph: &Graph<V>, trials: usize, rng: &mut R) -> Result<Cut<V>>
where
    V: Hash + Eq + Clone + Debug,
    R: Rng + ?Sized,
{
    if trials == 0 {
        return Err(GraphError::invalid_input(
            "Karger's algorithm needs at least one trial",
        ));
    }

    let mut best = min_cut(graph, rng)?;
    for trial in 1..trials {
        if best.is_empty() {
            break;
        }
        let cut = min_cut(graph, rng)?;
        log::trace!("trial {trial}: cut size {}", cut.size());
        if cut.size() < best.size() {
            best = cut;
        }
    }
    log::info!(
        "best cut of size {} over at most {} trials on {} nodes",
        best.size(),
        trials,
        graph.node_count()
    );
    Ok(best)
}

/// Counts trials until one returns a cut of size at most `target`.
///
/// Returns `Ok(None)` if `budget` trials pass without reaching it.
///
/// # Errors
/// * `InvalidInput` if `budget` is zero
/// * `NodeNotFound` as for [`min_cut`]
pub fn trials_until<V, R>(
    graph: &Graph<V>,
    target: usize,
    budget: usize,
    rng: &mut R,
) -> Result<Option<usize>>
where
    V: Hash + Eq + Clone + Debug,
    R: Rng + ?Sized,
{
    if budget == 0 {
        return Err(GraphError::invalid_input("trial budget must be positive"));
    }

    for trial in 1..=budget {
        let size = min_cut(graph, rng)?.size();
        log::trace!("trial {trial}: cut size {size}, target {target}");
        if size <= target {
            log::info!("cut of size {size} <= {target} reached after {trial} trials");
            return Ok(Some(trial));
        }
    }
    log::info!("no cut of size <= {target} within {budget} trials");
    Ok(None)
}

/// Parallel variant of [`karger_min_cut`].
///
/// Trial `i` draws from a `ChaCha8Rng` seeded with `seed` on stream `i`,
/// so the result depends only on `seed` and `trials`, not on scheduling.
/// Ties keep the lowest trial index.
///
/// # Errors
/// * `InvalidInput` if `trials` is zero
/// * `NodeNotFound` as for [`min_cut`]
pub fn par_karger_min_cut<V>(graph: &Graph<V>, trials: usize, seed: u64) -> Result<Cut<V>>
where
    V: Hash + Eq + Clone + Debug + Send + Sync,
{
    if trials == 0 {
        return Err(GraphError::invalid_input(
            "Karger's algorithm needs at least one trial",
        ));
    }

    let best = (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = trial_rng(seed, trial);
            min_cut(graph, &mut rng).map(|cut| (trial, cut))
        })
        .try_reduce_with(|a, b| {
            let b_wins = (b.1.size(), b.0) < (a.1.size(), a.0);
            Ok(if b_wins { b } else { a })
        });

    match best {
        Some(result) => {
            let (trial, cut) = result?;
            log::info!(
                "best cut of size {} found by trial {} of {}",
                cut.size(),
                trial,
                trials
            );
            Ok(cut)
        }
        None => Err(GraphError::invalid_input(
            "Karger's algorithm needs at least one trial",
        )),
    }
}

fn trial_rng(seed: u64, trial: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);
    rng
}
