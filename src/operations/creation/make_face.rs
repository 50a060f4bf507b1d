use crate::error::{Result, TopologyError};
use crate::geometry::{planarity_tolerance, Plane};
use crate::math::polygon::{project_to_plane, segments_intersect_2d};
use crate::math::Point3;
use crate::topology::{EdgeLoopId, FaceData, FaceId, TopologyStore};

/// Creates a planar face bounded by an edge loop.
///
/// The face normal follows the outer loop by the right-hand rule.
pub struct MakeFace {
    outer_loop: EdgeLoopId,
    inner_loops: Vec<EdgeLoopId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_loop: EdgeLoopId, inner_loops: Vec<EdgeLoopId>) -> Self {
        Self {
            outer_loop,
            inner_loops,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DegenerateFace`] if the outer loop is not
    /// planar or encloses no area, [`TopologyError::SelfIntersectingLoop`] if
    /// it crosses itself, and an error if any loop is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        let outer = store.edge_loop_positions(self.outer_loop)?;
        let surface = Plane::through_polygon(&outer)?;
        check_simple(&outer, &surface)?;
        let allowed = planarity_tolerance(&outer);

        for &inner in &self.inner_loops {
            let positions = store.edge_loop_positions(inner)?;
            if positions
                .iter()
                .any(|p| surface.signed_distance(p).abs() > allowed)
            {
                return Err(TopologyError::DegenerateFace(
                    "inner loop is not coplanar with the outer loop".into(),
                )
                .into());
            }
            check_simple(&positions, &surface)?;
        }

        Ok(store.add_face(FaceData {
            surface,
            outer_loop: self.outer_loop,
            inner_loops: self.inner_loops.clone(),
        }))
    }
}

/// Rejects loops whose non-adjacent segments touch.
fn check_simple(positions: &[Point3], plane: &Plane) -> std::result::Result<(), TopologyError> {
    let flat = project_to_plane(positions, plane.normal());
    let n = flat.len();
    for i in 0..n {
        for j in (i + 2)..n {
            // First and last segments share the closing point.
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a0, a1) = (&flat[i], &flat[(i + 1) % n]);
            let (b0, b1) = (&flat[j], &flat[(j + 1) % n]);
            if segments_intersect_2d(a0, a1, b0, b1) {
                return Err(TopologyError::SelfIntersectingLoop {
                    first: i,
                    second: j,
                });
            }
        }
    }
    Ok(())
}
