use crate::graph::{ChainGraph, StateId};
use crate::scc::{Class, Partition, SccConfig};
use cancel_this::is_cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::{debug, info};

/// Internal state of the component search.
///
/// This tracks the classic per-vertex Tarjan records (discovery index,
/// low-link, on-stack flag) together with the explicit frame stack that
/// stands in for call-stack recursion.
pub struct TarjanState {
    records: Vec<VertexRecord>,
    // Discovery counter; incremented exactly once per discovered vertex.
    next_index: u32,
    // The Tarjan stack of "active" vertices (0-based indices).
    active: Vec<usize>,
    // Simulated call stack; the top frame is the vertex currently visited.
    frames: Vec<Frame>,
    // Outer cursor over potential roots, so disconnected graphs are covered.
    next_root: usize,
    classes: Vec<Class>,
}

/// Step implementation for the component search. Each invocation handles one
/// frame event: it opens a new root, follows one edge, or closes one vertex.
pub struct TarjanStep;

struct VertexRecord {
    index: Option<u32>,
    lowlink: u32,
    on_stack: bool,
}

struct Frame {
    vertex: usize,
    edge_cursor: usize,
}

impl From<&ChainGraph> for TarjanState {
    fn from(value: &ChainGraph) -> Self {
        let records = value
            .states()
            .map(|_| VertexRecord {
                index: None,
                lowlink: 0,
                on_stack: false,
            })
            .collect();
        TarjanState {
            records,
            next_index: 0,
            active: Vec::new(),
            frames: Vec::new(),
            next_root: 0,
            classes: Vec::new(),
        }
    }
}

impl From<ChainGraph> for TarjanState {
    fn from(value: ChainGraph) -> Self {
        TarjanState::from(&value)
    }
}

impl ComputationStep<SccConfig, TarjanState, Partition> for TarjanStep {
    fn step(context: &SccConfig, state: &mut TarjanState) -> Completable<Partition> {
        is_cancelled!()?;
        let graph = &context.graph;

        let Some(frame) = state.frames.last_mut() else {
            // No traversal in progress; open the next undiscovered root.
            while state.next_root < graph.state_count() {
                let root = state.next_root;
                state.next_root += 1;
                if state.records[root].index.is_none() {
                    state.discover(root);
                    return Err(Suspended);
                }
            }

            info!(
                "Partition complete: {} classes over {} states.",
                state.classes.len(),
                graph.state_count()
            );
            return Ok(Partition::from_classes(
                graph.state_count(),
                state.classes.clone(),
            ));
        };

        let vertex = frame.vertex;
        let edges = graph.out_edges(StateId::from_index(vertex));
        if let Some(edge) = edges.get(frame.edge_cursor) {
            frame.edge_cursor += 1;
            let neighbor = edge.target.to_index();
            match state.records[neighbor].index {
                None => {
                    // Simulated recursive call; the low-link propagates back
                    // when the neighbor's frame closes.
                    state.discover(neighbor);
                }
                Some(number) if state.records[neighbor].on_stack => {
                    if number < state.records[vertex].lowlink {
                        state.records[vertex].lowlink = number;
                    }
                }
                Some(_) => {
                    // The neighbor belongs to an already closed component.
                }
            }
        } else {
            state.close(vertex);
        }

        Err(Suspended)
    }
}

impl TarjanState {
    /// Assign the next discovery index to `vertex`, mark it active and start
    /// visiting its edges.
    fn discover(&mut self, vertex: usize) {
        let record = &mut self.records[vertex];
        record.index = Some(self.next_index);
        record.lowlink = self.next_index;
        record.on_stack = true;
        self.next_index += 1;

        self.active.push(vertex);
        self.frames.push(Frame {
            vertex,
            edge_cursor: 0,
        });
    }

    /// All edges of `vertex` are processed: pop its frame, collect a class if
    /// it is a component root, and propagate its low-link to the caller.
    fn close(&mut self, vertex: usize) {
        self.frames.pop();

        let record = &self.records[vertex];
        let index = record.index.expect("Closed vertex must be discovered.");
        if record.lowlink == index {
            // `vertex` is the root of a component: pop the active stack down
            // to and including it. Pop order is the class's state order.
            let mut states = Vec::new();
            loop {
                let popped = self.active.pop().expect("Root must be on the stack.");
                self.records[popped].on_stack = false;
                states.push(StateId::from_index(popped));
                if popped == vertex {
                    break;
                }
            }

            let class = Class::new(self.classes.len(), states);
            debug!("Found communicating class {class}.");
            self.classes.push(class);
        }

        if let Some(parent) = self.frames.last() {
            let lowlink = self.records[vertex].lowlink;
            if lowlink < self.records[parent.vertex].lowlink {
                self.records[parent.vertex].lowlink = lowlink;
            }
        }
    }
}
