use super::point::PointId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// Data associated with a topological edge.
///
/// Edges are straight segments; the direction `start → end` is what a
/// forward [`OrientedEdge`](super::OrientedEdge) traverses.
#[derive(Debug, Clone, Copy)]
pub struct EdgeData {
    /// Start point of the edge.
    pub start: PointId,
    /// End point of the edge.
    pub end: PointId,
}

impl EdgeData {
    /// Creates a new edge from `start` to `end`.
    #[must_use]
    pub fn new(start: PointId, end: PointId) -> Self {
        Self { start, end }
    }
}
