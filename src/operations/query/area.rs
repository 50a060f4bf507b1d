use crate::error::Result;
use crate::math::polygon::polygon_area;
use crate::topology::{FaceId, TopologyStore};

/// Computes the area of a planar face, holes excluded.
pub struct FaceArea {
    face: FaceId,
}

impl FaceArea {
    /// Creates a new `FaceArea` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning the face area.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its loops is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let face = store.face(self.face)?;
        let mut area = polygon_area(&store.edge_loop_positions(face.outer_loop)?);
        for &inner in &face.inner_loops {
            area -= polygon_area(&store.edge_loop_positions(inner)?);
        }
        Ok(area)
    }
}
