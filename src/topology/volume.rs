use super::face_loop::FaceLoopId;

slotmap::new_key_type! {
    /// Unique identifier for a volume in the topology store.
    pub struct VolumeId;
}

/// Data associated with a topological volume.
///
/// A volume is the region enclosed by its outer face loop, minus any voids.
#[derive(Debug, Clone)]
pub struct VolumeData {
    /// The outer shell of the volume.
    pub outer_loop: FaceLoopId,
    /// Inner shells representing voids.
    pub inner_loops: Vec<FaceLoopId>,
}
