// Copyright 2026 bio-mgraph developers.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Labeled vertices with outgoing neighbor references.
//!
//! A `Node` never holds its neighbors directly. Neighbors are recorded by
//! label, and the labels resolve against the owning
//! [`Graph`](../graph/struct.Graph.html).

use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

use indexmap::IndexMap;

/// Weight attached to a directed edge.
pub type Weight = f64;

/// A labeled vertex together with its outgoing edges.
///
/// Nodes are created and connected through a
/// [`Graph`](../graph/struct.Graph.html), which keeps every neighbor label
/// registered as a node.
///
/// ```
/// use bio_mgraph::graph::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge("s1", "f1");
/// g.add_edge("s1", "f2");
/// let node = g.get_node(&"s1").unwrap();
/// assert_eq!(node.connections().collect::<Vec<_>>(), vec![&"f1", &"f2"]);
/// assert_eq!(node.to_string(), "s1 connectedTo: [f1, f2]");
/// ```
#[derive(new, Debug, Clone, PartialEq)]
pub struct Node<L: Hash + Eq> {
    id: L,
    #[new(default)]
    connected_to: IndexMap<L, Weight>,
}

impl<L> Node<L>
where
    L: Hash + Eq,
{
    /// Label of this node.
    pub fn id(&self) -> &L {
        &self.id
    }

    /// Add an edge to `neighbor` with weight 0.
    ///
    /// Adding an existing neighbor again resets its weight and keeps its
    /// position among the connections.
    pub(crate) fn add_neighbor(&mut self, neighbor: L) {
        self.add_weighted_neighbor(neighbor, 0.0);
    }

    /// Add an edge to `neighbor` carrying `weight`.
    pub(crate) fn add_weighted_neighbor(&mut self, neighbor: L, weight: Weight) {
        self.connected_to.insert(neighbor, weight);
    }

    /// Labels of all neighbors, in the order they were first added.
    pub fn connections(&self) -> impl Iterator<Item = &L> + '_ {
        self.connected_to.keys()
    }

    /// Neighbors together with their edge weights.
    pub fn weighted_connections(&self) -> impl Iterator<Item = (&L, Weight)> + '_ {
        self.connected_to.iter().map(|(label, weight)| (label, *weight))
    }

    /// Weight of the edge to `neighbor`, if there is one.
    pub fn weight(&self, neighbor: &L) -> Option<Weight> {
        self.connected_to.get(neighbor).copied()
    }

    pub fn is_connected_to(&self, neighbor: &L) -> bool {
        self.connected_to.contains_key(neighbor)
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.connected_to.len()
    }

    /// Remove the edge to `neighbor`. Does nothing if there is no such edge.
    ///
    /// Returns whether an edge was removed.
    pub(crate) fn del_connection(&mut self, neighbor: &L) -> bool {
        self.connected_to.shift_remove(neighbor).is_some()
    }
}

impl<L> Display for Node<L>
where
    L: Hash + Eq + Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} connectedTo: [", self.id)?;
        for (i, neighbor) in self.connections().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neighbor)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_neighbor_is_idempotent() {
        let mut node = Node::new("a");
        node.add_weighted_neighbor("b", 2.5);
        node.add_neighbor("c");
        node.add_neighbor("b");
        assert_eq!(node.degree(), 2);
        assert_eq!(node.weight(&"b"), Some(0.0));
        assert_eq!(node.connections().collect::<Vec<_>>(), vec![&"b", &"c"]);
    }

    #[test]
    fn del_connection() {
        let mut node = Node::new(1);
        node.add_neighbor(2);
        node.add_neighbor(3);
        node.add_neighbor(4);
        assert!(node.del_connection(&3));
        assert!(!node.del_connection(&3));
        assert!(!node.del_connection(&42));
        assert_eq!(node.connections().collect::<Vec<_>>(), vec![&2, &4]);
        assert!(!node.is_connected_to(&3));
    }

    #[test]
    fn display_without_neighbors() {
        let node: Node<String> = Node::new("lonely".to_owned());
        assert_eq!(node.to_string(), "lonely connectedTo: []");
        assert_eq!(node.id(), "lonely");
    }
}
