//! Text renderers for the analysis outputs.
//!
//! Everything here consumes the plain data structures produced by the core
//! (graphs, partitions, links, matrices) and writes text into a generic
//! `io::Write` sink; there is no algorithmic content. The Mermaid output is
//! meant to be pasted into any Mermaid-enabled viewer.

mod csv;
mod mermaid;

pub use csv::write_trajectory;
pub use mermaid::{state_label, write_chain_diagram, write_class_diagram};
