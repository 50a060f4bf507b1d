use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::math::polygon::extent;
use crate::math::TOLERANCE;
use crate::operations::query::SignedVolume;
use crate::topology::{FaceLoopId, TopologyStore, VolumeData, VolumeId};

/// Creates a volume from a closed face loop.
pub struct MakeVolume {
    outer_loop: FaceLoopId,
    inner_loops: Vec<FaceLoopId>,
}

impl MakeVolume {
    /// Creates a new `MakeVolume` operation.
    #[must_use]
    pub fn new(outer_loop: FaceLoopId, inner_loops: Vec<FaceLoopId>) -> Self {
        Self {
            outer_loop,
            inner_loops,
        }
    }

    /// Executes the operation, creating the volume in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvertedVolume`] if the outer shell's faces
    /// point inward (negative enclosed volume) or enclose nothing, and an
    /// error if any face loop is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<VolumeId> {
        let enclosed = check_encloses(store, self.outer_loop)?;
        debug!(enclosed, "outer shell volume");
        for &inner in &self.inner_loops {
            store.face_loop(inner)?;
        }

        Ok(store.add_volume(VolumeData {
            outer_loop: self.outer_loop,
            inner_loops: self.inner_loops.clone(),
        }))
    }
}

/// Checks that a shell encloses a positive volume that is not negligible
/// against the cube of its extent, returning the volume.
pub(crate) fn check_encloses(
    store: &TopologyStore,
    shell: FaceLoopId,
) -> std::result::Result<f64, TopologyError> {
    let enclosed = SignedVolume::new(shell).execute(store)?;
    let scale = extent(&store.face_loop_positions(shell)?);
    if enclosed <= TOLERANCE * scale.powi(3) {
        return Err(TopologyError::InvertedVolume(enclosed));
    }
    Ok(enclosed)
}
