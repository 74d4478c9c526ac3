pub mod cs;
pub mod error;

pub use cs::graph;
pub use cs::graph::{karger, Cut, DisjointSet, Graph};
pub use error::{GraphError, Result};
