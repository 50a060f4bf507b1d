use super::oriented::OrientedEdge;

slotmap::new_key_type! {
    /// Unique identifier for an edge loop in the topology store.
    pub struct EdgeLoopId;
}

/// A closed, ordered sequence of oriented edges.
///
/// Only [`MakeEdgeLoop`](crate::operations::creation::MakeEdgeLoop) creates
/// these, after checking that consecutive edges share endpoints.
#[derive(Debug, Clone)]
pub struct EdgeLoopData {
    /// The ordered sequence of oriented edges.
    pub edges: Vec<OrientedEdge>,
}
