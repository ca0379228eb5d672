// Copyright 2026 bio-mgraph developers.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Graphs built from a sample-by-feature membership matrix, as used for
//! incomplete phylogeny problems.
//!
//! Every sample (row) and every feature (column) becomes a node, and every
//! set matrix entry becomes a directed edge from the sample to the feature.
//!
//! ```
//! # use bio_mgraph::mgraph::MGraphError;
//! # fn try_main() -> Result<(), MGraphError> {
//! use bio_mgraph::matrix::MembershipMatrix;
//! use bio_mgraph::mgraph::MGraph;
//!
//! let m = MembershipMatrix::from_binary(vec![vec![1, 0], vec![1, 1]])?;
//! let mut g = MGraph::new();
//! g.build_graph(&m, &["s1", "s2"], &["f1", "f2"])?;
//! assert_eq!(
//!     g.get_edge_pairs(),
//!     vec![("s1", "f1"), ("s2", "f1"), ("s2", "f2")]
//! );
//! assert_eq!(g.get_pairs_containing(&"f2"), vec![("s2", "f2")]);
//! # Ok(())
//! # }
//! # fn main() { try_main().unwrap(); }
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Deref;

use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use thiserror::Error;
use tracing::debug;

use crate::graph::{Graph, GraphError};
use crate::matrix::{MatrixError, MembershipMatrix};
use crate::node::{Node, Weight};

/// A directed edge as a `(from, to)` pair of labels.
pub type EdgePair<L> = (L, L);

/// Whether a label names a sample (matrix row) or a feature (matrix column).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum Side {
    Sample,
    Feature,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MGraphError {
    #[error("matrix has {rows} rows but {samples} sample labels were given")]
    RowMismatch { rows: usize, samples: usize },
    #[error("matrix has {cols} columns but {features} feature labels were given")]
    ColumnMismatch { cols: usize, features: usize },
    #[error("invalid membership matrix")]
    Matrix(#[from] MatrixError),
}

/// A [`Graph`] whose edges connect samples to the features they carry.
///
/// `MGraph` dereferences to its underlying `Graph` for read access. Node and
/// edge mutations go through `MGraph` itself so that the sample and feature
/// roles stay in step with the nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct MGraph<L: Hash + Eq> {
    graph: Graph<L>,
    sides: IndexMap<L, Side>,
}

impl<L: Hash + Eq> Default for MGraph<L> {
    fn default() -> Self {
        MGraph {
            graph: Graph::default(),
            sides: IndexMap::new(),
        }
    }
}

impl<L> MGraph<L>
where
    L: Hash + Eq + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a new graph from `matrix`, see [`build_graph`](#method.build_graph).
    pub fn from_matrix(
        matrix: &MembershipMatrix,
        samples: &[L],
        features: &[L],
    ) -> Result<Self, MGraphError> {
        let mut g = Self::new();
        g.build_graph(matrix, samples, features)?;
        Ok(g)
    }

    /// Add the nodes and edges described by `matrix`.
    ///
    /// `samples` labels the rows and `features` labels the columns. All
    /// sample nodes are created first, then all feature nodes, then one edge
    /// `samples[i] -> features[j]` for every set entry `(i, j)`. A label
    /// occurring among both samples and features maps to a single node.
    ///
    /// The shape of `matrix` is checked against the label counts before
    /// anything is added. For a matrix without rows only the row count is
    /// checked.
    pub fn build_graph(
        &mut self,
        matrix: &MembershipMatrix,
        samples: &[L],
        features: &[L],
    ) -> Result<(), MGraphError> {
        if matrix.n_rows() != samples.len() {
            return Err(MGraphError::RowMismatch {
                rows: matrix.n_rows(),
                samples: samples.len(),
            });
        }
        if matrix.n_rows() > 0 && matrix.n_cols() != features.len() {
            return Err(MGraphError::ColumnMismatch {
                cols: matrix.n_cols(),
                features: features.len(),
            });
        }

        for (labels, side) in &[(samples, Side::Sample), (features, Side::Feature)] {
            for label in labels.iter() {
                self.graph.add_node(label.clone());
                self.sides.insert(label.clone(), *side);
            }
        }
        let mut edges = 0;
        for (i, j) in matrix.members() {
            self.graph.add_edge(samples[i].clone(), features[j].clone());
            edges += 1;
        }
        debug!(
            samples = samples.len(),
            features = features.len(),
            edges,
            "built graph from membership matrix"
        );
        Ok(())
    }

    /// Register a node for `label`, see [`Graph::add_node`]. Nodes added this
    /// way have no side.
    pub fn add_node(&mut self, label: L) -> &Node<L> {
        self.graph.add_node(label)
    }

    pub fn add_edge(&mut self, from: L, to: L) {
        self.graph.add_edge(from, to);
    }

    pub fn add_weighted_edge(&mut self, from: L, to: L, cost: Weight) {
        self.graph.add_weighted_edge(from, to, cost);
    }

    /// Remove the node for `label`, its edges and its side.
    pub fn del_node(&mut self, label: &L) -> Result<(), GraphError<L>> {
        self.graph.del_node(label)?;
        self.sides.shift_remove(label);
        Ok(())
    }

    /// All edges as `(from, to)` pairs. Nodes are visited in insertion order,
    /// and the edges of each node in the order they were added.
    pub fn get_edge_pairs(&self) -> Vec<EdgePair<L>> {
        self.graph
            .iter()
            .flat_map(|node| {
                node.connections()
                    .map(move |neighbor| (node.id().clone(), neighbor.clone()))
            })
            .collect()
    }

    /// The edge pairs having `label` as either endpoint.
    pub fn get_pairs_containing(&self, label: &L) -> Vec<EdgePair<L>> {
        self.get_edge_pairs()
            .into_iter()
            .filter(|(from, to)| from == label || to == label)
            .collect()
    }

    /// Whether `label` was registered as a sample or a feature. Labels given
    /// as both report the later role, `Side::Feature`.
    pub fn side(&self, label: &L) -> Option<Side> {
        self.sides.get(label).copied()
    }

    /// Labels of the nodes registered as samples.
    pub fn samples(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels_on(Side::Sample)
    }

    /// Labels of the nodes registered as features.
    pub fn features(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels_on(Side::Feature)
    }

    fn labels_on(&self, side: Side) -> impl Iterator<Item = &L> + '_ {
        self.sides
            .iter()
            .filter(move |(_, s)| **s == side)
            .map(|(label, _)| label)
    }
}

impl<L: Hash + Eq> Deref for MGraph<L> {
    type Target = Graph<L>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|x| x.to_string()).collect()
    }

    fn pair(a: &str, b: &str) -> EdgePair<String> {
        (a.to_owned(), b.to_owned())
    }

    #[test]
    fn identity_matrix() {
        let m = MembershipMatrix::from_binary(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let samples = labels(&["s1", "s2"]);
        let features = labels(&["f1", "f2"]);
        let g = MGraph::from_matrix(&m, &samples, &features).unwrap();
        assert_eq!(g.get_edge_pairs(), vec![pair("s1", "f1"), pair("s2", "f2")]);
        assert_eq!(
            g.nodes().collect::<Vec<_>>(),
            vec!["s1", "s2", "f1", "f2"]
        );
    }

    #[test]
    fn all_zero_matrix() {
        let m = MembershipMatrix::zeros(2, 3);
        let g = MGraph::from_matrix(&m, &[1, 2], &[10, 20, 30]).unwrap();
        assert_eq!(g.node_count(), 5);
        assert!(g.get_edge_pairs().is_empty());
    }

    #[test]
    fn pairs_containing() {
        let m: MembershipMatrix = "1 1 0\n0 1 1\n1 0 0".parse().unwrap();
        let g = MGraph::from_matrix(&m, &["a", "b", "c"], &["x", "y", "z"]).unwrap();
        assert_eq!(g.get_pairs_containing(&"y"), vec![("a", "y"), ("b", "y")]);
        assert_eq!(g.get_pairs_containing(&"a"), vec![("a", "x"), ("a", "y")]);
        assert!(g.get_pairs_containing(&"missing").is_empty());
    }

    #[test]
    fn shape_mismatch_leaves_graph_untouched() {
        let m = MembershipMatrix::zeros(2, 2);
        let mut g = MGraph::from_matrix(&MembershipMatrix::zeros(1, 1), &["s0"], &["f0"]).unwrap();
        let before = g.clone();
        assert_eq!(
            g.build_graph(&m, &["s1"], &["f1", "f2"]),
            Err(MGraphError::RowMismatch {
                rows: 2,
                samples: 1
            })
        );
        assert_eq!(
            g.build_graph(&m, &["s1", "s2"], &["f1"]),
            Err(MGraphError::ColumnMismatch {
                cols: 2,
                features: 1
            })
        );
        assert_eq!(g, before);
    }

    #[test]
    fn empty_matrix_creates_feature_nodes() {
        let m = MembershipMatrix::new(vec![]).unwrap();
        let g = MGraph::<&str>::from_matrix(&m, &[], &["f1", "f2"]).unwrap();
        assert_eq!(g.features().collect::<Vec<_>>(), vec![&"f1", &"f2"]);
        assert_eq!(g.samples().count(), 0);
    }

    #[test]
    fn shared_label_is_one_node() {
        let m = MembershipMatrix::from_binary(vec![vec![1, 1], vec![1, 0]]).unwrap();
        let g = MGraph::from_matrix(&m, &["a", "b"], &["b", "c"]).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.side(&"a"), Some(Side::Sample));
        assert_eq!(g.side(&"b"), Some(Side::Feature));
        assert_eq!(
            g.get_edge_pairs(),
            vec![("a", "b"), ("a", "c"), ("b", "b")]
        );
    }

    #[test]
    fn delete_drops_side() {
        let m = MembershipMatrix::from_binary(vec![vec![1, 1], vec![0, 1]]).unwrap();
        let mut g = MGraph::from_matrix(&m, &["s1", "s2"], &["f1", "f2"]).unwrap();
        g.del_node(&"f2").unwrap();
        assert_eq!(g.get_edge_pairs(), vec![("s1", "f1")]);
        assert!(g.get_pairs_containing(&"f2").is_empty());
        assert_eq!(g.side(&"f2"), None);
        assert_eq!(g.features().collect::<Vec<_>>(), vec![&"f1"]);
    }

    #[test]
    fn readded_node_has_no_side() {
        let m = MembershipMatrix::zeros(1, 1);
        let mut g = MGraph::from_matrix(&m, &["s1"], &["f1"]).unwrap();
        g.del_node(&"s1").unwrap();
        g.add_node("s1");
        assert_eq!(g.side(&"s1"), None);
        assert_eq!(g.samples().count(), 0);
        assert_eq!(g.del_node(&"s9"), Err(GraphError::NodeNotFound("s9")));
    }

    #[test]
    fn add_edge_without_matrix() {
        let mut g = MGraph::new();
        g.add_edge(1, 2);
        g.add_edge(1, 2);
        assert_eq!(g.get_edge_pairs(), vec![(1, 2)]);
        assert_eq!(g.side(&1), None);
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::Sample.to_string(), "Sample");
        assert_eq!(Side::Feature.as_ref(), "Feature");
    }
}
