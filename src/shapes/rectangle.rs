use tracing::instrument;

use crate::error::Result;
use crate::math::Point3;
use crate::model::Model;
use crate::operations::creation::{MakeEdge, MakeEdgeLoop, MakeFace};
use crate::tags::{Dimension, TagSet};
use crate::topology::{OrientedEdge, TopologyStore};

use super::{add_point, finish, RectangleParams};

/// Side names of the rectangle, in edge creation order.
const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Corners in traversal order: top-left, top-right, bottom-right, bottom-left.
pub(crate) fn rectangle_corners(params: &RectangleParams) -> [Point3; 4] {
    let (w, h, z) = (params.width, params.height, params.center_z);
    [
        Point3::new(0.0, z + h / 2.0, 0.0),
        Point3::new(w, z + h / 2.0, 0.0),
        Point3::new(w, z - h / 2.0, 0.0),
        Point3::new(0.0, z - h / 2.0, 0.0),
    ]
}

/// Builds a tagged rectangle in the XY plane.
///
/// The face is tagged `"domain"`; the edges `"top"`, `"right"`, `"bottom"`
/// and `"left"`.
pub struct MakeRectangle {
    params: RectangleParams,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation.
    #[must_use]
    pub fn new(params: RectangleParams) -> Self {
        Self { params }
    }

    /// Executes the operation, returning the model named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`](crate::error::ParameterError) for
    /// non-positive or non-finite parameters, before anything is built.
    #[instrument(skip(self), fields(width = self.params.width, height = self.params.height))]
    pub fn execute(&self, name: &str) -> Result<Model> {
        self.params.validate()?;

        let mut store = TopologyStore::new();
        let mut points = Vec::with_capacity(4);
        for corner in rectangle_corners(&self.params) {
            points.push(add_point(&mut store, corner, self.params.mesh_size)?);
        }

        let mut edges = Vec::with_capacity(4);
        for i in 0..4 {
            edges.push(MakeEdge::new(points[i], points[(i + 1) % 4]).execute(&mut store)?);
        }

        // The edges run clockwise; walk them backwards for an upward normal.
        let boundary: Vec<OrientedEdge> = edges
            .iter()
            .rev()
            .map(|&e| -OrientedEdge::from(e))
            .collect();
        let outline = MakeEdgeLoop::new(boundary).execute(&mut store)?;
        let face = MakeFace::new(outline, vec![]).execute(&mut store)?;

        let mut tags = TagSet::new();
        tags.assign(&store, "domain", [face])?;
        for (name, &edge) in SIDES.iter().zip(&edges) {
            tags.assign(&store, name, [edge])?;
        }

        finish(Model::new(
            name,
            Dimension::Face,
            self.params.mesh_size,
            store,
            tags,
        ))
    }
}
