use tracing::instrument;

use crate::error::Result;
use crate::math::Point3;
use crate::model::Model;
use crate::operations::creation::{MakeEdge, MakeEdgeLoop, MakeFace, MakeFaceLoop, MakeVolume};
use crate::tags::{Dimension, TagSet};
use crate::topology::{OrientedEdge, OrientedFace, TopologyStore};

use super::{add_point, finish, PrismParams};

/// Corner coordinates: the bottom ring at `z0 - t/2` counter-clockwise from
/// the origin, then the top ring at `z0 + t/2` in the same order.
fn prism_corners(params: &PrismParams) -> [Point3; 8] {
    let (w, h) = (params.width, params.height);
    let z0 = params.center_z - params.thickness / 2.0;
    let z1 = params.center_z + params.thickness / 2.0;
    [
        Point3::new(0.0, 0.0, z0),
        Point3::new(w, 0.0, z0),
        Point3::new(w, h, z0),
        Point3::new(0.0, h, z0),
        Point3::new(0.0, 0.0, z1),
        Point3::new(w, 0.0, z1),
        Point3::new(w, h, z1),
        Point3::new(0.0, h, z1),
    ]
}

/// Creates an axis-aligned box solid with every face tagged by its side.
///
/// Tags: `"points"` (all corners), `"edges"` (all edges), one face tag per
/// side (`"bottom"`, `"top"`, `"front"`, `"back"`, `"left"`, `"right"`) and
/// `"volume"`.
pub struct MakePrism {
    params: PrismParams,
}

impl MakePrism {
    /// Creates a new `MakePrism` operation.
    #[must_use]
    pub fn new(params: PrismParams) -> Self {
        Self { params }
    }

    /// Executes the operation, returning the model named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`](crate::error::ParameterError) for
    /// non-positive or non-finite parameters, before anything is built.
    #[instrument(skip(self), fields(
        width = self.params.width,
        height = self.params.height,
        thickness = self.params.thickness,
    ))]
    pub fn execute(&self, name: &str) -> Result<Model> {
        self.params.validate()?;

        let mut store = TopologyStore::new();
        let mut points = Vec::with_capacity(8);
        for corner in prism_corners(&self.params) {
            points.push(add_point(&mut store, corner, self.params.mesh_size)?);
        }

        // Bottom ring, top ring, then the vertical edges from bottom to top.
        let bottom = (0..4).map(|i| (i, (i + 1) % 4));
        let top = (0..4).map(|i| (i + 4, (i + 1) % 4 + 4));
        let vertical = (0..4).map(|i| (i, i + 4));
        let mut edges = Vec::with_capacity(12);
        for (a, b) in bottom.chain(top).chain(vertical) {
            edges.push(MakeEdge::new(points[a], points[b]).execute(&mut store)?);
        }
        let e: Vec<OrientedEdge> = edges.iter().map(|&id| id.into()).collect();

        // Every loop runs counter-clockwise seen from outside, so each edge
        // appears once forward and once reversed across the six faces.
        let sides = [
            ("bottom", [-e[3], -e[2], -e[1], -e[0]]),
            ("top", [e[4], e[5], e[6], e[7]]),
            ("front", [e[0], e[9], -e[4], -e[8]]),
            ("back", [e[11], -e[6], -e[10], e[2]]),
            ("left", [e[8], -e[7], -e[11], e[3]]),
            ("right", [e[1], e[10], -e[5], -e[9]]),
        ];
        let mut faces = Vec::with_capacity(sides.len());
        for (_, boundary) in &sides {
            let outline = MakeEdgeLoop::new(boundary.to_vec()).execute(&mut store)?;
            faces.push(MakeFace::new(outline, vec![]).execute(&mut store)?);
        }

        let shell = MakeFaceLoop::new(faces.iter().map(|&f| OrientedFace::from(f)).collect())
            .execute(&mut store)?;
        let volume = MakeVolume::new(shell, vec![]).execute(&mut store)?;

        let mut tags = TagSet::new();
        tags.assign(&store, "points", points.iter().copied())?;
        tags.assign(&store, "edges", edges.iter().copied())?;
        for ((name, _), &face) in sides.iter().zip(&faces) {
            tags.assign(&store, name, [face])?;
        }
        tags.assign(&store, "volume", [volume])?;

        finish(Model::new(
            name,
            Dimension::Volume,
            self.params.mesh_size,
            store,
            tags,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::{ParameterError, TagmeshError};
    use crate::math::polygon::centroid;
    use crate::math::Vector3;
    use crate::operations::query::{BoundingBox, FaceArea, SignedVolume};
    use crate::tags::Entity;
    use crate::topology::EdgeId;
    use approx::assert_relative_eq;

    fn build(w: f64, h: f64, t: f64) -> Model {
        MakePrism::new(PrismParams::new(w, h, t, 0.2))
            .execute("box")
            .unwrap()
    }

    #[test]
    fn entity_counts() {
        for (w, h, t) in [(1.0, 1.0, 1.0), (2.0, 3.0, 0.5), (0.1, 7.0, 4.0)] {
            let counts = build(w, h, t).store().counts();
            assert_eq!(counts.points, 8);
            assert_eq!(counts.edges, 12);
            assert_eq!(counts.edge_loops, 6);
            assert_eq!(counts.faces, 6);
            assert_eq!(counts.face_loops, 1);
            assert_eq!(counts.volumes, 1);
        }
    }

    #[test]
    fn every_edge_is_shared_with_opposite_signs() {
        let model = build(2.0, 3.0, 4.0);
        let store = model.store();
        let mut uses: HashMap<EdgeId, Vec<i8>> = HashMap::new();
        for (_, lp) in store.edge_loops() {
            for oe in &lp.edges {
                uses.entry(oe.id).or_default().push(oe.sign());
            }
        }
        assert_eq!(uses.len(), 12);
        for signs in uses.values() {
            assert_eq!(signs.len(), 2);
            assert_eq!(signs[0], -signs[1]);
        }
    }

    #[test]
    fn face_normals_point_outward() {
        let model = build(2.0, 2.0, 3.0);
        let store = model.store();
        let all: Vec<Point3> = store.points().map(|(_, p)| p.position).collect();
        let center = centroid(&all);
        for (id, face) in store.faces() {
            let pts = store.edge_loop_positions(face.outer_loop).unwrap();
            let to_face = centroid(&pts) - center;
            assert!(
                face.surface.normal().dot(&to_face) > 0.0,
                "face {id:?} normal {:?} points inward",
                face.surface.normal()
            );
        }
    }

    #[test]
    fn named_faces_have_the_right_normals() {
        let model = build(1.0, 2.0, 3.0);
        let expected = [
            ("bottom", -Vector3::z()),
            ("top", Vector3::z()),
            ("front", -Vector3::y()),
            ("back", Vector3::y()),
            ("left", -Vector3::x()),
            ("right", Vector3::x()),
        ];
        for (name, normal) in expected {
            let tag = model.tags().get(Dimension::Face, name).unwrap();
            assert_eq!(tag.len(), 1);
            let Entity::Face(face) = tag.entities()[0] else {
                panic!("{name} is not a face tag");
            };
            let data = model.store().face(face).unwrap();
            assert_relative_eq!(*data.surface.normal(), normal, epsilon = 1e-12);
        }
    }

    #[test]
    fn volume_and_areas() {
        let model = build(2.0, 3.0, 4.0);
        let store = model.store();
        let (_, volume) = store.volumes().next().unwrap();
        let v = SignedVolume::new(volume.outer_loop).execute(store).unwrap();
        assert_relative_eq!(v, 24.0, epsilon = 1e-9);

        let total: f64 = store
            .faces()
            .map(|(id, _)| FaceArea::new(id).execute(store).unwrap())
            .sum();
        assert_relative_eq!(total, 2.0 * (6.0 + 8.0 + 12.0), epsilon = 1e-9);
    }

    #[test]
    fn tags_cover_everything() {
        let model = build(1.0, 1.0, 1.0);
        let tags = model.tags();
        assert_eq!(tags.get(Dimension::Point, "points").unwrap().len(), 8);
        assert_eq!(tags.get(Dimension::Edge, "edges").unwrap().len(), 12);
        assert_eq!(tags.get(Dimension::Volume, "volume").unwrap().len(), 1);
        let face_tags: Vec<_> = tags.of_dimension(Dimension::Face).collect();
        assert_eq!(face_tags.len(), 6);
        assert!(face_tags.iter().all(|t| t.len() == 1));
    }

    #[test]
    fn thickness_is_centered() {
        let model = MakePrism::new(PrismParams::new(1.0, 2.0, 0.5, 0.1).with_center_z(3.0))
            .execute("offset")
            .unwrap();
        let aabb = BoundingBox::new().execute(model.store()).unwrap();
        assert_relative_eq!(aabb.min, Point3::new(0.0, 0.0, 2.75));
        assert_relative_eq!(aabb.max, Point3::new(1.0, 2.0, 3.25));
    }

    #[test]
    fn valid_at_every_magnitude() {
        for scale in [1e-6, 1e-4, 1e-3, 1.0, 1e6, 1e9] {
            let params = PrismParams::new(scale, 2.0 * scale, 0.5 * scale, scale / 10.0)
                .with_center_z(3.0 * scale);
            let model = MakePrism::new(params)
                .execute("scaled")
                .unwrap_or_else(|e| panic!("scale {scale}: {e}"));
            let counts = model.store().counts();
            assert_eq!(
                (counts.points, counts.edges, counts.faces, counts.volumes),
                (8, 12, 6, 1)
            );
            let (_, volume) = model.store().volumes().next().unwrap();
            let v = SignedVolume::new(volume.outer_loop)
                .execute(model.store())
                .unwrap();
            assert_relative_eq!(v, scale.powi(3), max_relative = 1e-9);
        }
    }

    #[test]
    fn zero_thickness_is_rejected() {
        let result = MakePrism::new(PrismParams::new(1.0, 1.0, 0.0, 0.1)).execute("flat");
        assert!(matches!(
            result,
            Err(TagmeshError::InvalidParameter(ParameterError::NotPositive {
                parameter: "thickness",
                ..
            }))
        ));
    }
}
