use crate::error::ParameterError;
use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a point in the topology store.
    pub struct PointId;
}

/// Data associated with a topological point.
#[derive(Debug, Clone)]
pub struct PointData {
    /// The 3D position of the point.
    pub position: Point3,
    /// Target element size near this point. Always strictly positive.
    pub mesh_size: f64,
}

impl PointData {
    /// Creates a new point at `position` carrying a local mesh size hint.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotPositive`] if `mesh_size` is not strictly
    /// positive, or [`ParameterError::NotFinite`] if any value is NaN or infinite.
    pub fn new(position: Point3, mesh_size: f64) -> Result<Self, ParameterError> {
        for (parameter, value) in [
            ("x", position.x),
            ("y", position.y),
            ("z", position.z),
            ("mesh_size", mesh_size),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { parameter, value });
            }
        }
        if mesh_size <= 0.0 {
            return Err(ParameterError::NotPositive {
                parameter: "mesh_size",
                value: mesh_size,
            });
        }
        Ok(Self {
            position,
            mesh_size,
        })
    }
}
