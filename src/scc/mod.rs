//! Communicating-class detection via Tarjan's strongly connected component
//! algorithm.
//!
//! The chain's states communicate exactly when they are mutually reachable, so
//! the maximal communicating classes are the strongly connected components of
//! the transition graph. A single Tarjan pass discovers every class and, as a
//! side effect, finishes components in reverse topological order: transitions
//! between distinct classes only ever point from a later-finished class to an
//! earlier-finished one, which makes the class-level graph acyclic (see
//! [`crate::condensation`]).
//!
//! The traversal itself runs on an explicit frame stack instead of call-stack
//! recursion, so its depth is bounded by a heap allocation rather than the
//! thread stack. Discovery and low-link semantics are identical to the
//! recursive formulation.
//!
//! # Example
//!
//! ```
//! use markov_classes::graph::{ChainGraph, StateId};
//! use markov_classes::scc::TarjanScc;
//! use computation_process::Algorithm;
//!
//! let mut graph = ChainGraph::new(2);
//! graph.add_edge(StateId::new(1), StateId::new(2), 1.0);
//! graph.add_edge(StateId::new(2), StateId::new(2), 1.0);
//!
//! let partition = TarjanScc::run(&graph, &graph).unwrap();
//! assert_eq!(partition.len(), 2);
//! ```

mod partition;
mod scc_config;
mod tarjan;

#[cfg(test)]
mod tests;

pub use partition::{Class, Partition};
pub use scc_config::SccConfig;
pub use tarjan::{TarjanState, TarjanStep};

use computation_process::Computation;

/// Tarjan's algorithm packaged as a resumable computation: poll it with
/// `try_compute`, or drive it to completion with `run`/`compute`.
///
/// The output [`Partition`] covers every state of the input graph exactly once.
pub type TarjanScc = Computation<SccConfig, TarjanState, Partition, TarjanStep>;
