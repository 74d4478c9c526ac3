use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::disjoint_set::DisjointSet;

/// An undirected, unweighted multigraph.
///
/// Parallel edges and self-loops are kept as separate entries. Nodes keep
/// insertion order; adding an edge registers any endpoint not yet present.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    nodes: Vec<V>,
    members: HashSet<V>,
    edges: Vec<(V, V)>,
}

impl<V> Default for Graph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            members: HashSet::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            members: HashSet::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Builds a graph from an edge list; the node set is the set of endpoints.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        edges.into_iter().collect()
    }

    /// Adds an isolated node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: V) -> bool {
        if self.members.contains(&node) {
            return false;
        }
        self.members.insert(node.clone());
        self.nodes.push(node);
        true
    }

    pub fn add_edge(&mut self, u: V, v: V) {
        self.add_node(u.clone());
        self.add_node(v.clone());
        self.edges.push((u, v));
    }

    pub fn nodes(&self) -> &[V] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: &V) -> bool {
        self.members.contains(node)
    }

    /// Returns `true` if every node is reachable from every other.
    /// The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let mut ds = DisjointSet::with_capacity(self.nodes.len());
        ds.make_set(self.nodes.iter().cloned());
        for (u, v) in &self.edges {
            // Endpoints are always registered by `add_edge`.
            if ds.union(u, v).is_err() {
                return false;
            }
        }
        ds.component_count() <= 1
    }
}

impl<V> FromIterator<(V, V)> for Graph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (u, v) in iter {
            graph.add_edge(u, v);
        }
        graph
    }
}
