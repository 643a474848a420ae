use crate::graph::{ChainGraph, StateId};
use std::path::Path;

/// Errors produced while loading a chain description.
///
/// Any of these aborts the whole analysis run; there is no partial recovery
/// from a malformed graph file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input file could not be opened or read.
    #[error("cannot read `{path}`: {reason}")]
    Unreadable { path: String, reason: String },

    /// The leading state count is missing or not an integer.
    #[error("missing or invalid state count `{token}`")]
    InvalidStateCount { token: String },

    /// A `start end weight` group ended prematurely.
    #[error("incomplete transition near token {position}")]
    IncompleteTransition { position: usize },

    /// A token could not be parsed as the expected number.
    #[error("invalid {expected} `{token}` at token {position}")]
    InvalidToken {
        expected: &'static str,
        token: String,
        position: usize,
    },

    /// A transition endpoint does not belong to the declared state range.
    #[error("state {state} out of range 1..={state_count}")]
    StateOutOfRange { state: usize, state_count: usize },
}

impl ChainGraph {
    /// Load a chain from a text file.
    ///
    /// See [`ChainGraph::parse`] for the format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ChainGraph, ParseError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ParseError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        ChainGraph::parse(&text)
    }

    /// Parse a chain description from whitespace-separated tokens.
    ///
    /// The first token is the state count `N`; the remaining tokens come in
    /// `start end weight` groups (1-based state numbers and a floating-point
    /// transition probability), repeated until the end of input. Duplicate
    /// `(start, end)` pairs are not deduplicated.
    pub fn parse(text: &str) -> Result<ChainGraph, ParseError> {
        let mut tokens = text.split_whitespace().enumerate();

        let state_count = match tokens.next() {
            Some((_, token)) => token
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidStateCount {
                    token: token.to_string(),
                })?,
            None => {
                return Err(ParseError::InvalidStateCount {
                    token: String::new(),
                });
            }
        };

        let mut graph = ChainGraph::new(state_count);
        while let Some((position, token)) = tokens.next() {
            let start = parse_state(token, position, state_count)?;
            let (position, token) = tokens
                .next()
                .ok_or(ParseError::IncompleteTransition { position })?;
            let end = parse_state(token, position, state_count)?;
            let (position, token) = tokens
                .next()
                .ok_or(ParseError::IncompleteTransition { position })?;
            let weight = token
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidToken {
                    expected: "transition probability",
                    token: token.to_string(),
                    position,
                })?;

            graph.add_edge(start, end, weight);
        }

        Ok(graph)
    }
}

fn parse_state(token: &str, position: usize, state_count: usize) -> Result<StateId, ParseError> {
    let state = token.parse::<usize>().map_err(|_| ParseError::InvalidToken {
        expected: "state number",
        token: token.to_string(),
        position,
    })?;
    if state == 0 || state > state_count {
        return Err(ParseError::StateOutOfRange { state, state_count });
    }
    Ok(StateId::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_simple_chain() {
        let graph = ChainGraph::parse("3\n1 2 1.0\n2 3 1.0\n3 1 1.0\n").unwrap();
        assert_eq!(graph.state_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let edges = graph.out_edges(StateId::new(2));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, StateId::new(3));
        assert_eq!(edges[0].weight, 1.0);
    }

    #[test]
    fn accepts_arbitrary_whitespace_and_duplicates() {
        let graph = ChainGraph::parse("2  1 2 0.5\t1 2 0.5\n2 2 1").unwrap();
        assert_eq!(graph.out_edges(StateId::new(1)).len(), 2);
        assert_eq!(graph.out_edges(StateId::new(2)).len(), 1);
    }

    #[test]
    fn rejects_missing_state_count() {
        assert!(matches!(
            ChainGraph::parse(""),
            Err(ParseError::InvalidStateCount { .. })
        ));
        assert!(matches!(
            ChainGraph::parse("abc 1 2 0.5"),
            Err(ParseError::InvalidStateCount { .. })
        ));
    }

    #[test]
    fn rejects_incomplete_transition() {
        assert!(matches!(
            ChainGraph::parse("2 1 2"),
            Err(ParseError::IncompleteTransition { .. })
        ));
    }

    #[test]
    fn rejects_bad_weight() {
        assert!(matches!(
            ChainGraph::parse("2 1 2 huh"),
            Err(ParseError::InvalidToken {
                expected: "transition probability",
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_state() {
        assert!(matches!(
            ChainGraph::parse("2 1 3 0.5"),
            Err(ParseError::StateOutOfRange {
                state: 3,
                state_count: 2
            })
        ));
        assert!(matches!(
            ChainGraph::parse("2 0 1 0.5"),
            Err(ParseError::StateOutOfRange { state: 0, .. })
        ));
    }

    #[test]
    fn unreadable_file_is_reported() {
        let result = ChainGraph::from_file("definitely/not/a/file.txt");
        assert!(matches!(result, Err(ParseError::Unreadable { .. })));
    }
}
