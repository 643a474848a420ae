use crate::graph::{ChainGraph, StateId};
use log::info;
use std::fmt::{Display, Formatter};

/// Outgoing weight sums outside `[SUM_LOWER, SUM_UPPER]` are reported
/// as [`StochasticIssue::WeightSum`].
const SUM_LOWER: f64 = 0.99;
const SUM_UPPER: f64 = 1.01;

/// A best-effort diagnostic about a state that violates the Markov property.
///
/// These are modeling warnings, not errors: the analysis still runs on a
/// graph that fails the check, it just may not describe a proper chain.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StochasticIssue {
    /// The state has no outgoing transitions at all.
    NoTransitions { state: StateId },
    /// The outgoing weights of the state do not sum to (approximately) one.
    WeightSum { state: StateId, sum: f64 },
}

impl Display for StochasticIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StochasticIssue::NoTransitions { state } => {
                write!(f, "state {state} has no transitions")
            }
            StochasticIssue::WeightSum { state, sum } => {
                write!(f, "the probabilities of state {state} sum to {sum:.2}")
            }
        }
    }
}

/// Check that every state's outgoing weights sum to approximately one.
///
/// Returns one issue per offending state; an empty result means the graph
/// is a proper Markov graph.
pub fn check_stochastic(graph: &ChainGraph) -> Vec<StochasticIssue> {
    let mut issues = Vec::new();
    for state in graph.states() {
        let edges = graph.out_edges(state);
        if edges.is_empty() {
            issues.push(StochasticIssue::NoTransitions { state });
            continue;
        }
        let sum: f64 = edges.iter().map(|edge| edge.weight).sum();
        if !(SUM_LOWER..=SUM_UPPER).contains(&sum) {
            issues.push(StochasticIssue::WeightSum { state, sum });
        }
    }

    if issues.is_empty() {
        info!("The graph is a Markov graph.");
    } else {
        info!("The graph is not a Markov graph ({} issues).", issues.len());
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::from_edges;

    #[test]
    fn well_formed_chain_has_no_issues() {
        let graph = from_edges(3, &[(1, 2, 0.5), (1, 3, 0.5), (2, 2, 1.0), (3, 1, 1.0)]);
        assert!(check_stochastic(&graph).is_empty());
    }

    #[test]
    fn rounding_slack_is_tolerated() {
        let graph = from_edges(1, &[(1, 1, 0.995)]);
        assert!(check_stochastic(&graph).is_empty());
    }

    #[test]
    fn missing_transitions_are_reported() {
        let graph = from_edges(2, &[(1, 2, 1.0)]);
        let issues = check_stochastic(&graph);
        assert_eq!(
            issues,
            vec![StochasticIssue::NoTransitions {
                state: StateId::new(2)
            }]
        );
    }

    #[test]
    fn bad_weight_sum_is_reported() {
        let graph = from_edges(2, &[(1, 2, 0.4), (1, 1, 0.4), (2, 2, 1.0)]);
        let issues = check_stochastic(&graph);
        assert_eq!(issues.len(), 1);
        match &issues[0] {
            StochasticIssue::WeightSum { state, sum } => {
                assert_eq!(*state, StateId::new(1));
                assert!((sum - 0.8).abs() < 1e-9);
            }
            other => panic!("Unexpected issue {other:?}"),
        }
    }
}
