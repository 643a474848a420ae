//! The explicit state-transition graph of a finite Markov chain.
//!
//! A chain over `N` states is stored as one adjacency list per state, each entry
//! an [`Edge`] carrying the target state and the transition probability. The graph
//! is built once (usually by [`ChainGraph::from_file`]) and is read-only afterwards;
//! every downstream component shares it by reference.
//!
//! Adjacency lists preserve the order in which edges were added. No stronger
//! ordering promise is made to callers: algorithms must only rely on the order
//! being stable for the lifetime of the graph.

mod parse;
mod validate;

pub use parse::ParseError;
pub use validate::{StochasticIssue, check_stochastic};

use std::fmt::{Display, Formatter};

/// A 1-based identifier of a chain state.
///
/// State ids run in `1..=N` to match the usual textbook numbering and the input
/// format; [`StateId::to_index`] converts to the 0-based row/column index used
/// by matrices and internal arrays.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateId(usize);

impl StateId {
    /// Create a state id from its 1-based number.
    ///
    /// # Panics
    ///
    /// Panics if `id` is zero.
    pub fn new(id: usize) -> StateId {
        assert!(id > 0, "State ids are 1-based; got 0.");
        StateId(id)
    }

    /// Create a state id from a 0-based index.
    pub fn from_index(index: usize) -> StateId {
        StateId(index + 1)
    }

    /// The 0-based index of this state.
    pub fn to_index(self) -> usize {
        self.0 - 1
    }

    /// The 1-based number of this state.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single weighted transition stored in an adjacency list.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// The target state of the transition.
    pub target: StateId,
    /// The transition probability. Well-formed inputs keep this in `[0, 1]`,
    /// but the graph itself does not enforce it (see [`check_stochastic`]).
    pub weight: f64,
}

/// A weighted directed graph of transition probabilities, stored as
/// per-state adjacency lists.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl ChainGraph {
    /// Create a graph with `state_count` states and no transitions.
    pub fn new(state_count: usize) -> ChainGraph {
        ChainGraph {
            adjacency: vec![Vec::new(); state_count],
        }
    }

    /// The number of states in the chain.
    pub fn state_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterate over all state ids, in ascending order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + use<> {
        (1..=self.state_count()).map(StateId)
    }

    /// Append a transition to the source state's adjacency list.
    ///
    /// Duplicate `(source, target)` pairs are kept as-is; the input format does
    /// not deduplicate them and neither does the graph.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `target` does not belong to this graph.
    pub fn add_edge(&mut self, source: StateId, target: StateId, weight: f64) {
        assert!(
            target.to_index() < self.state_count(),
            "Target state {} out of range 1..={}.",
            target,
            self.state_count()
        );
        self.adjacency[source.to_index()].push(Edge { target, weight });
    }

    /// The outgoing transitions of `state`, in a stable (insertion) order.
    ///
    /// An empty slice is legal and denotes a state with no outgoing
    /// transitions (a modeling warning, see [`check_stochastic`]).
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to this graph.
    pub fn out_edges(&self, state: StateId) -> &[Edge] {
        &self.adjacency[state.to_index()]
    }

    /// The total number of transitions in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|list| list.len()).sum()
    }
}
