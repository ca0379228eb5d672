//! Graphs relating samples to the features they carry, derived from binary
//! membership matrices, for working on incomplete phylogeny problems.
//!
//! The [`graph`](graph/index.html) module provides a labeled directed graph,
//! and [`mgraph`](mgraph/index.html) builds such graphs from a
//! [`MembershipMatrix`](matrix/struct.MembershipMatrix.html).
//!
//! None of the types here synchronize internally; they are meant for
//! single-threaded use.

#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate lazy_static;

pub mod graph;
pub mod matrix;
pub mod mgraph;
pub mod node;
#[cfg(feature = "phylogeny")]
pub mod phylogeny;
