use crate::error::{Result, TopologyError};
use crate::math::{Point3, Vector3};
use crate::topology::TopologyStore;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Edge lengths along x, y and z.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Computes the axis-aligned bounding box of every point in a store.
pub struct BoundingBox;

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] if the store has no points.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let mut points = store.points().map(|(_, p)| p.position);
        let first = points.next().ok_or(TopologyError::EntityNotFound("point"))?;
        let (min, max) = points.fold((first, first), |(lo, hi), p| {
            (lo.inf(&p), hi.sup(&p))
        });
        Ok(Aabb { min, max })
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::fixtures::tetrahedron;
    use approx::assert_relative_eq;

    #[test]
    fn tetrahedron_box() {
        let mut store = TopologyStore::new();
        tetrahedron(&mut store);
        let aabb = BoundingBox::new().execute(&store).unwrap();
        assert_relative_eq!(aabb.min, Point3::origin());
        assert_relative_eq!(aabb.extent(), Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn empty_store_has_no_box() {
        assert!(BoundingBox::new().execute(&TopologyStore::new()).is_err());
    }
}
