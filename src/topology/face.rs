use crate::geometry::Plane;

use super::edge_loop::EdgeLoopId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// A face is a planar region bounded by an outer edge loop and optionally
/// inner loops (holes). Its normal follows the outer loop by the right-hand
/// rule.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The plane carrying this face, oriented like the outer loop.
    pub surface: Plane,
    /// The outer boundary loop.
    pub outer_loop: EdgeLoopId,
    /// Inner boundary loops (holes).
    pub inner_loops: Vec<EdgeLoopId>,
}
