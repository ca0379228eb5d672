// Copyright 2026 bio-mgraph developers.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Export into a `petgraph` directed graph.
//! Each node keeps its label as node weight, and the node indices follow the
//! insertion order of the source graph.
//! The edges carry their weights, which are 0 unless set via `add_weighted_edge`.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::Graph;
use crate::node::Weight;

pub type Proximity = Weight;

pub type MTree<L> = DiGraph<L, Proximity>;

impl<L> Graph<L>
where
    L: Hash + Eq + Clone + Debug,
{
    /// Copy this graph into a [`petgraph::graph::DiGraph`].
    ///
    /// ```
    /// use bio_mgraph::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_edge("s1", "f1");
    /// g.add_weighted_edge("s2", "f1", 0.5);
    /// let tree = g.to_digraph();
    /// assert_eq!(tree.node_count(), 3);
    /// assert_eq!(tree.edge_count(), 2);
    /// ```
    pub fn to_digraph(&self) -> MTree<L> {
        let mut tree = DiGraph::with_capacity(self.node_count(), self.edge_count());
        let indices: HashMap<&L, NodeIndex> = self
            .iter()
            .map(|node| (node.id(), tree.add_node(node.id().clone())))
            .collect();
        for node in self {
            for (neighbor, weight) in node.weighted_connections() {
                tree.add_edge(indices[node.id()], indices[neighbor], weight);
            }
        }
        tree
    }
}
