use crate::graph::StateId;
use std::fmt::{Display, Formatter};

/// One maximal communicating class: a non-empty, ordered list of states
/// discovered together as a strongly connected component.
///
/// The state order is the order in which the component search finished the
/// states (last-finished first). The order is implementation-defined but
/// self-consistent: it is the row/column order of every submatrix extracted
/// for this class, so consumers can map matrix indices back to states through
/// [`Class::states`].
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Class {
    name: String,
    states: Vec<StateId>,
}

impl Class {
    /// Build the `index`-th class of a partition (names run `C1, C2, …` in
    /// discovery order).
    pub(crate) fn new(index: usize, states: Vec<StateId>) -> Class {
        debug_assert!(!states.is_empty(), "A communicating class cannot be empty.");
        Class {
            name: format!("C{}", index + 1),
            states,
        }
    }

    /// The stable display name of this class.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member states, in component finish order.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// The number of states in the class.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Classes are non-empty by construction, so this is always `false`; it
    /// exists for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether the class consists of a single state.
    pub fn is_singleton(&self) -> bool {
        self.states.len() == 1
    }

    /// Whether the given state belongs to this class.
    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.name)?;
        for state in &self.states {
            write!(f, " {state}")?;
        }
        Ok(())
    }
}

/// The complete set of communicating classes of one chain.
///
/// Invariant: every state id in `1..=N` appears in exactly one class. The
/// partition is computed once per graph and immutable afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    classes: Vec<Class>,
    // Class index per 0-based state index; replaces a per-lookup linear scan.
    class_of: Vec<usize>,
}

impl Partition {
    /// Assemble a partition from discovered classes.
    ///
    /// # Panics
    ///
    /// Panics unless the classes cover `1..=state_count` without overlap.
    pub(crate) fn from_classes(state_count: usize, classes: Vec<Class>) -> Partition {
        let mut class_of = vec![usize::MAX; state_count];
        for (index, class) in classes.iter().enumerate() {
            for state in class.states() {
                assert_eq!(
                    class_of[state.to_index()],
                    usize::MAX,
                    "State {state} appears in more than one class."
                );
                class_of[state.to_index()] = index;
            }
        }
        assert!(
            class_of.iter().all(|it| *it != usize::MAX),
            "The classes do not cover the whole state space."
        );
        Partition { classes, class_of }
    }

    /// All classes, in discovery order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// The number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the partition has no classes (only true for an empty chain).
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The class at the given index.
    pub fn class(&self, index: usize) -> &Class {
        &self.classes[index]
    }

    /// The index of the class that contains `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to the partitioned graph.
    pub fn class_of(&self, state: StateId) -> usize {
        self.class_of[state.to_index()]
    }

    /// The number of states covered by the partition.
    pub fn state_count(&self) -> usize {
        self.class_of.len()
    }
}
