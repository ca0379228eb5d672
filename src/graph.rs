// Copyright 2026 bio-mgraph developers.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! A directed graph owning its nodes, keyed by label.
//!
//! Nodes live in an insertion-ordered map from label to [`Node`], and every
//! node refers to its neighbors by label. Labels therefore act as arena keys:
//! deleting a node only requires removing its entry and scrubbing the label
//! from the other adjacency maps.
//!
//! # Example
//!
//! ```rust
//! use bio_mgraph::graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_edge("a", "b");
//! g.add_edge("a", "c");
//! assert!(g.contains(&"c"));
//! assert_eq!(g.nodes().collect::<Vec<_>>(), vec![&"a", &"b", &"c"]);
//!
//! g.del_node(&"b").unwrap();
//! assert_eq!(g.edge_count(), 1);
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::map::{IndexMap, Values};
use thiserror::Error;
use tracing::{debug, trace};

use crate::node::{Node, Weight};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError<L: Debug> {
    #[error("node {0:?} does not exist")]
    NodeNotFound(L),
}

/// Directed graph over nodes labeled with `L`.
///
/// The graph is a plain single-threaded data structure without any interior
/// locking. Sharing it between threads for mutation requires external
/// synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<L: Hash + Eq> {
    nodes: IndexMap<L, Node<L>>,
}

impl<L: Hash + Eq> Default for Graph<L> {
    fn default() -> Self {
        Graph {
            nodes: IndexMap::new(),
        }
    }
}

impl<L> Graph<L>
where
    L: Hash + Eq + Clone + Debug,
{
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node for `label` and return it.
    ///
    /// If the label is already present the existing node is returned
    /// unchanged, together with all of its edges. Edges can only be added
    /// through the graph, so every neighbor is always a node of the graph.
    pub fn add_node(&mut self, label: L) -> &Node<L> {
        self.get_or_create(label)
    }

    fn get_or_create(&mut self, label: L) -> &mut Node<L> {
        self.nodes
            .entry(label.clone())
            .or_insert_with(|| Node::new(label))
    }

    /// The node registered for `label`, or `None`.
    pub fn get_node(&self, label: &L) -> Option<&Node<L>> {
        self.nodes.get(label)
    }

    /// Remove the node for `label` together with every edge pointing to it.
    ///
    /// Fails with `GraphError::NodeNotFound` and leaves the graph untouched
    /// if no such node exists.
    pub fn del_node(&mut self, label: &L) -> Result<(), GraphError<L>> {
        if !self.contains(label) {
            return Err(GraphError::NodeNotFound(label.clone()));
        }
        let mut inbound = 0;
        for node in self.nodes.values_mut() {
            if node.del_connection(label) {
                inbound += 1;
            }
        }
        self.nodes.shift_remove(label);
        debug!(?label, inbound, "deleted node");
        Ok(())
    }

    pub fn contains(&self, label: &L) -> bool {
        self.nodes.contains_key(label)
    }

    /// Add a directed edge `from -> to` with weight 0, creating missing
    /// endpoints first.
    pub fn add_edge(&mut self, from: L, to: L) {
        trace!(?from, ?to, "adding edge");
        self.get_or_create(to.clone());
        self.get_or_create(from).add_neighbor(to);
    }

    /// Add a directed edge `from -> to` carrying `cost`, creating missing
    /// endpoints first. An existing edge has its weight replaced.
    pub fn add_weighted_edge(&mut self, from: L, to: L, cost: Weight) {
        trace!(?from, ?to, cost, "adding edge");
        self.get_or_create(to.clone());
        self.get_or_create(from).add_weighted_neighbor(to, cost);
    }

    /// Labels of all nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &L> + '_ {
        self.nodes.keys()
    }

    /// All nodes, in insertion order.
    pub fn iter(&self) -> Iter<'_, L> {
        Iter {
            inner: self.nodes.values(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.iter().map(Node::degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator over the nodes of a [`Graph`], in insertion order.
pub struct Iter<'a, L: Hash + Eq> {
    inner: Values<'a, L, Node<L>>,
}

impl<'a, L> Iterator for Iter<'a, L>
where
    L: Hash + Eq,
{
    type Item = &'a Node<L>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, L> IntoIterator for &'a Graph<L>
where
    L: Hash + Eq + Clone + Debug,
{
    type Item = &'a Node<L>;
    type IntoIter = Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
