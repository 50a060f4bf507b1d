use crate::error::TopologyError;
use crate::math::polygon::tetra_volume6;
use crate::math::Point3;
use crate::topology::{FaceLoopId, TopologyStore};

/// Computes the signed volume enclosed by a face loop.
///
/// Applies the divergence theorem to the oriented faces: each face polygon
/// is fanned from its first point and every fan triangle contributes the
/// signed volume of the tetrahedron it spans with the shell's first point. Outward-facing
/// shells give a positive result, inward-facing ones a negative result.
pub struct SignedVolume {
    face_loop: FaceLoopId,
}

impl SignedVolume {
    /// Creates a new `SignedVolume` query.
    #[must_use]
    pub fn new(face_loop: FaceLoopId) -> Self {
        Self { face_loop }
    }

    /// Executes the query, returning the signed volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the face loop or any entity it references is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64, TopologyError> {
        let mut volume6 = 0.0;
        let mut apex = None;
        for of in &store.face_loop(self.face_loop)?.faces {
            let face = store.face(of.id)?;
            let sign = f64::from(of.sign());
            for &lp in std::iter::once(&face.outer_loop).chain(&face.inner_loops) {
                let pts = store.edge_loop_positions(lp)?;
                let Some(&first) = pts.first() else {
                    continue;
                };
                // Measuring from a shell point keeps far-off shells accurate.
                let origin = *apex.get_or_insert(first);
                let local: Vec<Point3> = pts.iter().map(|p| Point3::from(p - origin)).collect();
                for i in 1..local.len().saturating_sub(1) {
                    volume6 += sign * tetra_volume6(&local[0], &local[i], &local[i + 1]);
                }
            }
        }
        Ok(volume6 / 6.0)
    }
}
