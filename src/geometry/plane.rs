use crate::error::TopologyError;
use crate::math::polygon::{centroid, extent, newell_normal, signed_distance_to_plane};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Largest off-plane distance accepted for a polygon of this size.
pub(crate) fn planarity_tolerance(points: &[Point3]) -> f64 {
    TOLERANCE * 1e3 * extent(points)
}

/// An oriented infinite plane carrying a planar face.
///
/// Defined by an origin and a unit normal. Faces built from a loop store the
/// loop centroid as origin and the loop's Newell normal, so the plane's
/// orientation is the face's orientation.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// Fits the plane through a closed polygon.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DegenerateFace`] if the polygon encloses no
    /// area or any vertex lies off the fitted plane.
    pub fn through_polygon(points: &[Point3]) -> Result<Self, TopologyError> {
        let normal = newell_normal(points)
            .ok_or_else(|| TopologyError::DegenerateFace("loop encloses no area".into()))?;
        let origin = centroid(points);
        let allowed = planarity_tolerance(points);

        for (i, p) in points.iter().enumerate() {
            let dist = signed_distance_to_plane(p, &origin, &normal);
            if dist.abs() > allowed {
                return Err(TopologyError::DegenerateFace(format!(
                    "loop point {i} lies {dist:e} off the face plane"
                )));
            }
        }
        Ok(Self { origin, normal })
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance of `point` from the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        signed_distance_to_plane(point, &self.origin, &self.normal)
    }
}
