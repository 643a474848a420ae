//! Transient / persistent / absorbing labels for communicating classes.

use crate::graph::ChainGraph;
use crate::scc::Partition;
use log::debug;
use std::fmt::{Display, Formatter};

/// The behavioral label of one communicating class.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Some transition leaves the class; once left, the chain never returns.
    Transient,
    /// No transition leaves the class (closed under transition).
    Persistent,
    /// Persistent and a single state: once entered, never left.
    Absorbing,
}

impl Classification {
    /// Persistent classes, including absorbing ones.
    pub fn is_persistent(self) -> bool {
        matches!(self, Classification::Persistent | Classification::Absorbing)
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Transient => write!(f, "transient"),
            Classification::Persistent => write!(f, "persistent"),
            Classification::Absorbing => write!(f, "absorbing"),
        }
    }
}

/// Label every class of the partition, in class order.
///
/// A class is transient iff any edge of any member state targets a state
/// outside the class; persistent otherwise; absorbing when persistent and a
/// singleton. This is a pure function of the graph and the partition, linear
/// in the edges incident to each class.
pub fn classify(graph: &ChainGraph, partition: &Partition) -> Vec<Classification> {
    partition
        .classes()
        .iter()
        .enumerate()
        .map(|(index, class)| {
            let escapes = class.states().iter().any(|state| {
                graph
                    .out_edges(*state)
                    .iter()
                    .any(|edge| partition.class_of(edge.target) != index)
            });

            let classification = if escapes {
                Classification::Transient
            } else if class.is_singleton() {
                Classification::Absorbing
            } else {
                Classification::Persistent
            };

            debug!("Class {} is {classification}.", class.name());
            classification
        })
        .collect()
}

/// A chain is irreducible when all states communicate, i.e. the partition is
/// a single class.
pub fn is_irreducible(partition: &Partition) -> bool {
    partition.len() == 1
}
