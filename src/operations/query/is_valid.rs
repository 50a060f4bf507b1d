use crate::error::TopologyError;
use crate::geometry::Plane;
use crate::math::{coincident, Vector3};
use crate::model::Model;
use crate::operations::creation::{check_closed, check_encloses, check_watertight};

/// Validates the topological and geometric consistency of a model.
///
/// Re-runs every check the creation operations perform, plus an optional
/// requirement that all faces point along a given normal (used for planar
/// models, which must be counter-clockwise in the XY plane).
#[derive(Debug, Default)]
pub struct IsValid {
    face_normal: Option<Vector3>,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Additionally requires every face normal to equal `normal`.
    #[must_use]
    pub fn with_face_normal(mut self, normal: Vector3) -> Self {
        self.face_normal = Some(normal.normalize());
        self
    }

    /// Executes the validation, returning `true` if the model is valid.
    #[must_use]
    pub fn execute(&self, model: &Model) -> bool {
        self.check(model).is_ok()
    }

    /// Executes the validation, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// Returns the [`TopologyError`] describing the first inconsistency.
    pub fn check(&self, model: &Model) -> Result<(), TopologyError> {
        let store = model.store();

        for (_, edge) in store.edges() {
            let a = store.point(edge.start)?.position;
            let b = store.point(edge.end)?.position;
            if edge.start == edge.end || coincident(&a, &b) {
                return Err(TopologyError::DegenerateEdge);
            }
        }

        for (_, lp) in store.edge_loops() {
            check_closed(store, &lp.edges)?;
        }

        for (_, face) in store.faces() {
            let fitted = Plane::through_polygon(&store.edge_loop_positions(face.outer_loop)?)?;
            if fitted.normal().dot(face.surface.normal()) < 1.0 - 1e-9 {
                return Err(TopologyError::DegenerateFace(
                    "stored orientation disagrees with the outer loop".into(),
                ));
            }
            if let Some(expected) = &self.face_normal {
                if fitted.normal().dot(expected) < 1.0 - 1e-9 {
                    return Err(TopologyError::DegenerateFace(format!(
                        "face normal {:?} does not point along {:?}",
                        fitted.normal(),
                        expected
                    )));
                }
            }
        }

        for (_, shell) in store.face_loops() {
            check_watertight(store, &shell.faces)?;
        }

        for (_, volume) in store.volumes() {
            check_encloses(store, volume.outer_loop)?;
        }

        model.tags().check(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::fixtures::tetrahedron;
    use crate::operations::creation::{MakeFaceLoop, MakeVolume};
    use crate::tags::{Dimension, TagSet};
    use crate::topology::TopologyStore;

    fn tetra_model() -> Model {
        let mut store = TopologyStore::new();
        let faces = tetrahedron(&mut store);
        let shell = MakeFaceLoop::new(faces.iter().map(|&f| f.into()).collect())
            .execute(&mut store)
            .unwrap();
        let volume = MakeVolume::new(shell, vec![]).execute(&mut store).unwrap();
        let mut tags = TagSet::new();
        tags.assign(&store, "volume", [volume]).unwrap();
        Model::new("tetra", Dimension::Volume, 0.5, store, tags)
    }

    #[test]
    fn tetrahedron_is_valid() {
        assert!(IsValid::new().execute(&tetra_model()));
    }

    #[test]
    fn slanted_faces_fail_a_normal_requirement() {
        let result = IsValid::new()
            .with_face_normal(Vector3::z())
            .check(&tetra_model());
        assert!(matches!(result, Err(TopologyError::DegenerateFace(_))));
    }
}
