use crate::error::{Result, TopologyError};
use crate::math::coincident;
use crate::topology::{EdgeData, EdgeId, PointId, TopologyStore};

/// Creates a straight edge between two existing points.
pub struct MakeEdge {
    start: PointId,
    end: PointId,
}

impl MakeEdge {
    /// Creates a new `MakeEdge` operation.
    #[must_use]
    pub fn new(start: PointId, end: PointId) -> Self {
        Self { start, end }
    }

    /// Executes the operation, creating the edge in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] if either endpoint is missing
    /// and [`TopologyError::DegenerateEdge`] if the endpoints coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<EdgeId> {
        let a = store.point(self.start)?.position;
        let b = store.point(self.end)?.position;
        if self.start == self.end || coincident(&a, &b) {
            return Err(TopologyError::DegenerateEdge.into());
        }
        Ok(store.add_edge(EdgeData::new(self.start, self.end)))
    }
}
