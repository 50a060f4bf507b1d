//! Shape builders.
//!
//! Each builder resolves its parameters into point coordinates, assembles
//! the oriented topology, tags it, and returns a validated [`Model`].

mod fractured;
mod params;
mod prism;
mod rectangle;

pub use fractured::{fracture_endpoints, FractureTagging, FracturedGeometry, MakeFracturedRectangle};
pub use params::{PrismParams, RectangleParams};
pub use prism::MakePrism;
pub use rectangle::MakeRectangle;

use tracing::debug;

use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::model::Model;
use crate::operations::query::IsValid;
use crate::tags::Dimension;
use crate::topology::{PointData, PointId, TopologyStore};

/// Adds a point carrying the mesh size hint.
fn add_point(store: &mut TopologyStore, position: Point3, mesh_size: f64) -> Result<PointId> {
    Ok(store.add_point(PointData::new(position, mesh_size)?))
}

/// Runs the full validation on a freshly built model.
///
/// Planar models must have every face counter-clockwise in the XY plane.
fn finish(model: Model) -> Result<Model> {
    let check = match model.dimension() {
        Dimension::Volume => IsValid::new(),
        _ => IsValid::new().with_face_normal(Vector3::z()),
    };
    check.check(&model)?;
    debug!(model = model.name(), summary = %model.summary(), "model built");
    Ok(model)
}
