use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};

/// Disjoint-set (union-find) over arbitrary hashable nodes.
///
/// Nodes are interned to dense indices on registration; `parent` and `rank`
/// are indexed by those. Each instance owns its state, so independent
/// structures never observe each other's merges.
///
/// # Examples
/// ```
/// use karger_cut::DisjointSet;
///
/// let mut ds = DisjointSet::new();
/// ds.make_set(["a", "b", "c"]);
/// ds.union(&"a", &"b").unwrap();
///
/// assert!(ds.same_set(&"a", &"b").unwrap());
/// assert!(!ds.same_set(&"a", &"c").unwrap());
/// assert_eq!(ds.component_count(), 2);
/// ```
///
/// # Complexity
/// * `find` / `union`: amortized O(α(n)) with path compression and union-by-rank
/// * Space: O(n)
#[derive(Debug, Clone)]
pub struct DisjointSet<V> {
    index: HashMap<V, usize>,
    nodes: Vec<V>,
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl<V> Default for DisjointSet<V>
where
    V: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DisjointSet<V>
where
    V: Hash + Eq + Clone + Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Registers every node in `nodes` as its own singleton component.
    ///
    /// Nodes that are already registered are left untouched, so overlapping
    /// or repeated calls never undo earlier unions.
    pub fn make_set<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = V>,
    {
        for node in nodes {
            if self.index.contains_key(&node) {
                continue;
            }
            let key = self.nodes.len();
            self.index.insert(node.clone(), key);
            self.nodes.push(node);
            self.parent.push(key);
            self.rank.push(0);
            self.components += 1;
        }
    }

    /// Returns the root node of the component containing `node`.
    ///
    /// Every node on the path to the root is re-pointed directly at it.
    ///
    /// # Errors
    /// * `NodeNotFound` if `node` was never registered
    pub fn find(&mut self, node: &V) -> Result<V> {
        let root = self.find_root(node)?;
        Ok(self.nodes[root].clone())
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// Returns `Ok(false)` if they were already in the same component.
    /// On equal rank, `b`'s root is attached under `a`'s root.
    ///
    /// # Errors
    /// * `NodeNotFound` if either node was never registered; nothing is merged
    pub fn union(&mut self, a: &V, b: &V) -> Result<bool> {
        let a_root = self.find_root(a)?;
        let b_root = self.find_root(b)?;
        if a_root == b_root {
            return Ok(false);
        }
        match self.rank[a_root].cmp(&self.rank[b_root]) {
            std::cmp::Ordering::Less => self.parent[a_root] = b_root,
            std::cmp::Ordering::Greater => self.parent[b_root] = a_root,
            std::cmp::Ordering::Equal => {
                self.parent[b_root] = a_root;
                self.rank[a_root] += 1;
            }
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns whether `a` and `b` currently share a component.
    pub fn same_set(&mut self, a: &V, b: &V) -> Result<bool> {
        Ok(self.find_root(a)? == self.find_root(b)?)
    }

    pub fn contains(&self, node: &V) -> bool {
        self.index.contains_key(node)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Groups the registered nodes by component.
    ///
    /// Groups are ordered by the registration position of their first
    /// member, and members keep registration order.
    pub fn components(&mut self) -> Vec<Vec<V>> {
        let mut slot: HashMap<usize, usize> = HashMap::with_capacity(self.components);
        let mut groups: Vec<Vec<V>> = Vec::with_capacity(self.components);
        for key in 0..self.nodes.len() {
            let root = self.compress(key);
            let group = *slot.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(self.nodes[key].clone());
        }
        groups
    }

    fn find_root(&mut self, node: &V) -> Result<usize> {
        let key = *self
            .index
            .get(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        Ok(self.compress(key))
    }

    fn compress(&mut self, key: usize) -> usize {
        let mut root = key;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = key;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}
