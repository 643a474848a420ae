//! The class-level view of the chain: which classes can reach which, and the
//! minimal (Hasse) link set that presents this reachability as a partial
//! order diagram.
//!
//! The nodes of the condensation are the communicating classes; a direct link
//! `A → B` (`A != B`) means some state of `A` transitions into some state of
//! `B`. By the finish-order guarantee of the component search, this graph is
//! acyclic, so its reachability relation is a partial order and has a unique
//! transitive reduction.


use crate::graph::ChainGraph;
use crate::scc::Partition;
use log::debug;
use std::collections::BTreeSet;

/// A directed link between two classes of a partition, identified by their
/// class indices.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// The class some state of which has an outgoing cross-class transition.
    pub source: usize,
    /// The class that transition lands in.
    pub target: usize,
}

/// The distinct direct links of the condensation, ascending by
/// `(source, target)`.
pub fn direct_links(graph: &ChainGraph, partition: &Partition) -> Vec<Link> {
    let mut links = BTreeSet::new();
    for state in graph.states() {
        let source = partition.class_of(state);
        for edge in graph.out_edges(state) {
            let target = partition.class_of(edge.target);
            if source != target {
                links.insert(Link { source, target });
            }
        }
    }
    links.into_iter().collect()
}

/// For each class, the set of classes reachable through one or more links.
///
/// Entry `[a][b]` is true when class `a` reaches class `b`. The relation is
/// irreflexive here because the condensation is acyclic: no class reaches
/// itself through a non-empty path.
pub fn reachability(links: &[Link], class_count: usize) -> Vec<Vec<bool>> {
    let mut successors = vec![Vec::new(); class_count];
    for link in links {
        successors[link.source].push(link.target);
    }

    let mut reach = vec![vec![false; class_count]; class_count];
    for start in 0..class_count {
        // Plain DFS over the condensation edges.
        let mut stack = successors[start].clone();
        while let Some(current) = stack.pop() {
            if !reach[start][current] {
                reach[start][current] = true;
                stack.extend_from_slice(&successors[current]);
            }
        }
    }
    reach
}

/// The covering relation of class reachability: the direct links that are not
/// implied by a longer path through a third class.
///
/// A direct link `A → B` is discarded when some class `C` (distinct from both)
/// satisfies `A ⇝ C` and `C ⇝ B`. The survivors are exactly the edges of the
/// Hasse diagram. Output order is ascending `(source, target)`; it carries no
/// semantics beyond determinism.
pub fn hasse_links(graph: &ChainGraph, partition: &Partition) -> Vec<Link> {
    let links = direct_links(graph, partition);
    let reach = reachability(&links, partition.len());

    let reduced: Vec<Link> = links
        .into_iter()
        .filter(|link| {
            let redundant = (0..partition.len()).any(|via| {
                via != link.source
                    && via != link.target
                    && reach[link.source][via]
                    && reach[via][link.target]
            });
            if redundant {
                debug!(
                    "Link {} -> {} is implied by a longer path.",
                    partition.class(link.source).name(),
                    partition.class(link.target).name()
                );
            }
            !redundant
        })
        .collect();

    debug!("Condensation reduced to {} covering links.", reduced.len());
    reduced
}
