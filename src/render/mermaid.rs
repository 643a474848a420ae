use crate::classify::Classification;
use crate::condensation::Link;
use crate::graph::{ChainGraph, StateId};
use crate::scc::Partition;
use std::io;
use std::io::Write;

const HEADER: &str = "---\nconfig:\n   layout: elk\n   theme: neo\n   look: neo\n---\n\nflowchart LR\n";

/// The spreadsheet-style letter label of a state: `1..=26` map to `A..=Z`,
/// `27` to `AA`, and so on.
pub fn state_label(state: StateId) -> String {
    let mut i = state.get() - 1;
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (i % 26) as u8));
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Render the raw chain as a Mermaid flowchart: one circle node per state,
/// one arrow per transition, labeled with the two-decimal weight.
pub fn write_chain_diagram(out: &mut impl Write, graph: &ChainGraph) -> io::Result<()> {
    write!(out, "{HEADER}")?;

    for state in graph.states() {
        writeln!(out, "{}(({}))", state_label(state), state)?;
    }
    writeln!(out)?;

    for state in graph.states() {
        for edge in graph.out_edges(state) {
            writeln!(
                out,
                "{} -->|{:.2}|{}",
                state_label(state),
                edge.weight,
                state_label(edge.target)
            )?;
        }
    }

    Ok(())
}

/// Render the class-level Hasse diagram: one node per communicating class
/// (listing its states and classification), one arrow per covering link.
pub fn write_class_diagram(
    out: &mut impl Write,
    partition: &Partition,
    classifications: &[Classification],
    links: &[Link],
) -> io::Result<()> {
    write!(out, "{HEADER}")?;

    for (class, classification) in partition.classes().iter().zip(classifications) {
        write!(out, "{}[\"{}:", class.name(), class.name())?;
        for state in class.states() {
            write!(out, " {state}")?;
        }
        writeln!(out, " ({classification})\"]")?;
    }
    writeln!(out)?;

    for link in links {
        writeln!(
            out,
            "{} --> {}",
            partition.class(link.source).name(),
            partition.class(link.target).name()
        )?;
    }

    Ok(())
}
