pub mod disjoint_set;
pub mod karger;
pub mod multigraph;

pub use disjoint_set::DisjointSet;
pub use karger::{
    karger_min_cut, min_cut, par_karger_min_cut, recommended_trials, trials_until, Cut,
};
pub use multigraph::Graph;
