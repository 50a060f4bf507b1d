use std::collections::HashSet;

use crate::error::{Result, TopologyError};
use crate::topology::{EdgeLoopData, EdgeLoopId, OrientedEdge, TopologyStore};

/// Creates a closed loop from a sequence of oriented edges.
pub struct MakeEdgeLoop {
    edges: Vec<OrientedEdge>,
}

impl MakeEdgeLoop {
    /// Creates a new `MakeEdgeLoop` operation.
    #[must_use]
    pub fn new(edges: Vec<OrientedEdge>) -> Self {
        Self { edges }
    }

    /// Executes the operation, creating the loop in the topology store.
    ///
    /// # Errors
    ///
    /// Returns a [`TopologyError`] if the loop is empty, references a missing
    /// or repeated edge, or does not close.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<EdgeLoopId> {
        check_closed(store, &self.edges)?;
        Ok(store.add_edge_loop(EdgeLoopData {
            edges: self.edges.clone(),
        }))
    }
}

/// Checks that `edges` form one closed chain: the end point of every
/// oriented edge is the start point of the next, wrapping around.
pub(crate) fn check_closed(
    store: &TopologyStore,
    edges: &[OrientedEdge],
) -> std::result::Result<(), TopologyError> {
    if edges.is_empty() {
        return Err(TopologyError::EmptyLoop);
    }

    let mut seen = HashSet::with_capacity(edges.len());
    let mut ends = Vec::with_capacity(edges.len());
    for (i, oe) in edges.iter().enumerate() {
        if !seen.insert(oe.id) {
            let first = edges.iter().position(|e| e.id == oe.id).unwrap_or(i);
            return Err(TopologyError::RepeatedEdge { first, second: i });
        }
        ends.push(store.oriented_endpoints(*oe)?);
    }

    let n = ends.len();
    for i in 0..n {
        let next = (i + 1) % n;
        if ends[i].1 != ends[next].0 {
            return Err(TopologyError::LoopNotClosed { position: i, next });
        }
    }
    Ok(())
}
