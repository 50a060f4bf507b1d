use super::oriented::OrientedFace;

slotmap::new_key_type! {
    /// Unique identifier for a face loop in the topology store.
    pub struct FaceLoopId;
}

/// A closed shell of oriented faces.
///
/// Every edge on the boundary of one face is cancelled by exactly one other
/// face traversing it in the opposite direction.
#[derive(Debug, Clone)]
pub struct FaceLoopData {
    /// The faces that make up this shell.
    pub faces: Vec<OrientedFace>,
}
