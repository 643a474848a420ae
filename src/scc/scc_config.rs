use crate::graph::ChainGraph;

/// A configuration object for the communicating-class search.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SccConfig {
    /// The transition graph whose states are partitioned. The graph is
    /// read-only for the whole computation.
    pub graph: ChainGraph,
}

impl From<ChainGraph> for SccConfig {
    fn from(value: ChainGraph) -> Self {
        SccConfig::new(value)
    }
}

impl From<&ChainGraph> for SccConfig {
    fn from(value: &ChainGraph) -> Self {
        SccConfig::new(value.clone())
    }
}

impl SccConfig {
    /// Create a new instance of [`SccConfig`] for the given [`ChainGraph`].
    pub fn new(graph: ChainGraph) -> SccConfig {
        SccConfig { graph }
    }
}
