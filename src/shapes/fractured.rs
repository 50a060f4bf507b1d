use std::fmt;
use std::str::FromStr;

use tracing::instrument;

use crate::config::fracture_angle;
use crate::error::{ParameterError, Result, TopologyError};
use crate::math::Point3;
use crate::model::Model;
use crate::operations::creation::{MakeEdge, MakeEdgeLoop, MakeFace};
use crate::tags::{Dimension, TagSet};
use crate::topology::{EdgeId, FaceId, OrientedEdge, PointId, TopologyStore};

use super::rectangle::rectangle_corners;
use super::{add_point, finish, RectangleParams};

/// Heights at which the fracture meets the left and right sides.
///
/// The fracture crosses the full width at the fixed fracture angle and is
/// anchored on the rectangle's vertical center, so it rises by
/// `width · tan(angle)` from left to right.
#[must_use]
pub fn fracture_endpoints(width: f64, center_z: f64) -> (f64, f64) {
    let half_rise = width * fracture_angle().tan() / 2.0;
    (center_z - half_rise, center_z + half_rise)
}

/// How a fractured rectangle is tagged.
///
/// Both strategies apply to the same geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractureTagging {
    /// Regions: `"top_surf"` and `"bot_surf"` faces plus the `"fracture"` edge.
    Domain,
    /// Boundary conditions: `"top"`, `"bottom"`, `"right"` and `"left"`
    /// edges plus the `"p4"` corner point.
    BoundaryConditions,
}

impl FromStr for FractureTagging {
    type Err = ParameterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "domain" => Ok(Self::Domain),
            "BC" => Ok(Self::BoundaryConditions),
            other => Err(ParameterError::UnknownMode(other.to_owned())),
        }
    }
}

impl fmt::Display for FractureTagging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Domain => "domain",
            Self::BoundaryConditions => "BC",
        })
    }
}

/// The untagged geometry of a fractured rectangle.
///
/// Point names follow the corners of the plain rectangle (`p1` top-left,
/// `p2` top-right, `p3` bottom-right, `p4` bottom-left), then the fracture
/// ends (`p5` left, `p6` right).
#[derive(Debug)]
pub struct FracturedGeometry {
    pub store: TopologyStore,
    pub points: [PointId; 6],
    /// `p2 → p1`
    pub top: EdgeId,
    /// `p1 → p5`
    pub left_upper: EdgeId,
    /// `p5 → p4`
    pub left_lower: EdgeId,
    /// `p4 → p3`
    pub bottom: EdgeId,
    /// `p3 → p6`
    pub right_lower: EdgeId,
    /// `p6 → p2`
    pub right_upper: EdgeId,
    /// `p6 → p5`
    pub fracture: EdgeId,
    /// Face above the fracture.
    pub upper: FaceId,
    /// Face below the fracture.
    pub lower: FaceId,
}

impl FracturedGeometry {
    /// Assembles the two sub-faces sharing the fracture edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the fracture does
    /// not fit strictly inside the rectangle.
    pub fn build(params: &RectangleParams) -> Result<Self> {
        params.validate()?;
        let rise = params.width * fracture_angle().tan();
        if rise >= params.height {
            return Err(ParameterError::FractureOutOfBounds {
                rise,
                height: params.height,
            }
            .into());
        }

        let (y_left, y_right) = fracture_endpoints(params.width, params.center_z);
        let [c1, c2, c3, c4] = rectangle_corners(params);

        let mut store = TopologyStore::new();
        let mut add = |position| add_point(&mut store, position, params.mesh_size);
        let points = [
            add(c1)?,
            add(c2)?,
            add(c3)?,
            add(c4)?,
            add(Point3::new(0.0, y_left, 0.0))?,
            add(Point3::new(params.width, y_right, 0.0))?,
        ];
        let [p1, p2, p3, p4, p5, p6] = points;

        let top = MakeEdge::new(p2, p1).execute(&mut store)?;
        let left_upper = MakeEdge::new(p1, p5).execute(&mut store)?;
        let left_lower = MakeEdge::new(p5, p4).execute(&mut store)?;
        let bottom = MakeEdge::new(p4, p3).execute(&mut store)?;
        let right_lower = MakeEdge::new(p3, p6).execute(&mut store)?;
        let right_upper = MakeEdge::new(p6, p2).execute(&mut store)?;
        let fracture = MakeEdge::new(p6, p5).execute(&mut store)?;

        // The upper face walks the fracture left to right, the lower face
        // right to left.
        let fwd = OrientedEdge::forward;
        let upper_loop = MakeEdgeLoop::new(vec![
            fwd(top),
            fwd(left_upper),
            -fwd(fracture),
            fwd(right_upper),
        ])
        .execute(&mut store)?;
        let upper = MakeFace::new(upper_loop, vec![]).execute(&mut store)?;

        let lower_loop = MakeEdgeLoop::new(vec![
            fwd(bottom),
            fwd(right_lower),
            fwd(fracture),
            fwd(left_lower),
        ])
        .execute(&mut store)?;
        let lower = MakeFace::new(lower_loop, vec![]).execute(&mut store)?;

        Ok(Self {
            store,
            points,
            top,
            left_upper,
            left_lower,
            bottom,
            right_lower,
            right_upper,
            fracture,
            upper,
            lower,
        })
    }

    /// Applies a tagging strategy to the geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`TopologyError`] if a tag cannot be assigned.
    pub fn tag(&self, tagging: FractureTagging) -> std::result::Result<TagSet, TopologyError> {
        let store = &self.store;
        let mut tags = TagSet::new();
        match tagging {
            FractureTagging::Domain => {
                tags.assign(store, "top_surf", [self.upper])?;
                tags.assign(store, "bot_surf", [self.lower])?;
                tags.assign(store, "fracture", [self.fracture])?;
            }
            FractureTagging::BoundaryConditions => {
                tags.assign(store, "top", [self.top])?;
                tags.assign(store, "bottom", [self.bottom])?;
                tags.assign(store, "right", [self.right_lower, self.right_upper])?;
                tags.assign(store, "left", [self.left_upper, self.left_lower])?;
                tags.assign(store, "p4", [self.points[3]])?;
            }
        }
        Ok(tags)
    }
}

/// Builds a rectangle split in two by an inclined fracture line.
pub struct MakeFracturedRectangle {
    params: RectangleParams,
    tagging: FractureTagging,
}

impl MakeFracturedRectangle {
    /// Creates a new `MakeFracturedRectangle` operation.
    #[must_use]
    pub fn new(params: RectangleParams, tagging: FractureTagging) -> Self {
        Self { params, tagging }
    }

    /// Executes the operation, returning the model named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] for invalid parameters or a fracture that
    /// leaves the rectangle, before anything is built.
    #[instrument(skip(self), fields(width = self.params.width, tagging = %self.tagging))]
    pub fn execute(&self, name: &str) -> Result<Model> {
        let geometry = FracturedGeometry::build(&self.params)?;
        let tags = geometry.tag(self.tagging)?;
        finish(Model::new(
            name,
            Dimension::Face,
            self.params.mesh_size,
            geometry.store,
            tags,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TagmeshError;
    use crate::operations::query::FaceArea;
    use crate::tags::Entity;
    use approx::assert_relative_eq;

    fn params() -> RectangleParams {
        RectangleParams::new(1.0, 2.0, 0.05)
    }

    fn position(store: &TopologyStore, id: PointId) -> Point3 {
        store.point(id).unwrap().position
    }

    #[test]
    fn endpoints_follow_the_fixed_angle() {
        for (w, z0) in [(1.0, 0.0), (2.0, 0.5), (0.3, -4.0)] {
            let (left, right) = fracture_endpoints(w, z0);
            let t = 30.0_f64.to_radians().tan();
            assert_relative_eq!(left, z0 - w * t / 2.0);
            assert_relative_eq!(right, z0 + w * t / 2.0);
        }
    }

    #[test]
    fn fracture_points_sit_on_the_sides() {
        let p = params().with_center_z(0.25);
        let g = FracturedGeometry::build(&p).unwrap();
        let (y_left, y_right) = fracture_endpoints(p.width, p.center_z);
        assert_relative_eq!(position(&g.store, g.points[4]), Point3::new(0.0, y_left, 0.0));
        assert_relative_eq!(position(&g.store, g.points[5]), Point3::new(1.0, y_right, 0.0));
    }

    #[test]
    fn sub_faces_reconstruct_the_rectangle() {
        for (w, h) in [(1.0, 2.0), (2.0, 1.5), (0.5, 10.0)] {
            let g = FracturedGeometry::build(&RectangleParams::new(w, h, 0.1)).unwrap();
            let upper = FaceArea::new(g.upper).execute(&g.store).unwrap();
            let lower = FaceArea::new(g.lower).execute(&g.store).unwrap();
            assert_relative_eq!(upper + lower, w * h, epsilon = 1e-12);
            assert!(upper > 0.0 && lower > 0.0);
        }
    }

    #[test]
    fn fracture_is_shared_with_opposite_signs() {
        let g = FracturedGeometry::build(&params()).unwrap();
        let sign_in = |face: FaceId| -> Vec<i8> {
            let lp = g.store.face(face).unwrap().outer_loop;
            g.store
                .edge_loop(lp)
                .unwrap()
                .edges
                .iter()
                .filter(|oe| oe.id == g.fracture)
                .map(OrientedEdge::sign)
                .collect()
        };
        assert_eq!(sign_in(g.upper), vec![-1]);
        assert_eq!(sign_in(g.lower), vec![1]);
    }

    #[test]
    fn counts() {
        let g = FracturedGeometry::build(&params()).unwrap();
        let c = g.store.counts();
        assert_eq!((c.points, c.edges, c.edge_loops, c.faces), (6, 7, 2, 2));
    }

    #[test]
    fn domain_tagging() {
        let model = MakeFracturedRectangle::new(params(), FractureTagging::Domain)
            .execute("frac")
            .unwrap();
        let tags = model.tags();
        assert_eq!(tags.of_dimension(Dimension::Face).count(), 2);
        let tagged_faces: usize = tags.of_dimension(Dimension::Face).map(|t| t.len()).sum();
        assert_eq!(tagged_faces, 2);
        assert_eq!(tags.get(Dimension::Edge, "fracture").unwrap().len(), 1);
        assert_eq!(tags.of_dimension(Dimension::Edge).count(), 1);
        assert_eq!(tags.of_dimension(Dimension::Point).count(), 0);
    }

    #[test]
    fn boundary_condition_tagging() {
        let g = FracturedGeometry::build(&params()).unwrap();
        let tags = g.tag(FractureTagging::BoundaryConditions).unwrap();

        let right = tags.get(Dimension::Edge, "right").unwrap();
        let left = tags.get(Dimension::Edge, "left").unwrap();
        assert_eq!(right.len(), 2);
        assert_eq!(left.len(), 2);
        assert!(right.contains(g.right_lower) && right.contains(g.right_upper));
        assert!(left.contains(g.left_upper) && left.contains(g.left_lower));
        assert_eq!(
            tags.get(Dimension::Edge, "top").unwrap().entities(),
            &[Entity::Edge(g.top)]
        );
        assert_eq!(
            tags.get(Dimension::Edge, "bottom").unwrap().entities(),
            &[Entity::Edge(g.bottom)]
        );

        let p4 = tags.get(Dimension::Point, "p4").unwrap();
        assert_eq!(p4.entities(), &[Entity::Point(g.points[3])]);
        assert_relative_eq!(position(&g.store, g.points[3]), Point3::new(0.0, -1.0, 0.0));
        assert!(tags.of_dimension(Dimension::Face).next().is_none());
    }

    #[test]
    fn valid_at_every_magnitude() {
        for scale in [1e-6, 1e-3, 1.0, 1e6, 1e9] {
            for tagging in [FractureTagging::Domain, FractureTagging::BoundaryConditions] {
                let params = RectangleParams::new(scale, 2.0 * scale, scale / 10.0);
                let model = MakeFracturedRectangle::new(params, tagging)
                    .execute("scaled")
                    .unwrap_or_else(|e| panic!("scale {scale}, {tagging}: {e}"));
                let c = model.store().counts();
                assert_eq!((c.points, c.edges, c.faces), (6, 7, 2));
                let total: f64 = model
                    .store()
                    .faces()
                    .map(|(id, _)| FaceArea::new(id).execute(model.store()).unwrap())
                    .sum();
                assert_relative_eq!(total, 2.0 * scale * scale, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn mode_strings() {
        assert_eq!("domain".parse::<FractureTagging>().unwrap(), FractureTagging::Domain);
        assert_eq!(
            "BC".parse::<FractureTagging>().unwrap(),
            FractureTagging::BoundaryConditions
        );
        assert!(matches!(
            "bc".parse::<FractureTagging>(),
            Err(ParameterError::UnknownMode(m)) if m == "bc"
        ));
        assert_eq!(FractureTagging::BoundaryConditions.to_string(), "BC");
    }

    #[test]
    fn fracture_must_fit_inside() {
        // tan(30°) ≈ 0.577, so a 2 wide rectangle needs more than 1.155 height.
        let params = RectangleParams::new(2.0, 1.0, 0.1);
        let result = MakeFracturedRectangle::new(params, FractureTagging::Domain).execute("flat");
        assert!(matches!(
            result,
            Err(TagmeshError::InvalidParameter(ParameterError::FractureOutOfBounds { .. }))
        ));
    }

    #[test]
    fn invalid_parameters_come_first() {
        let params = RectangleParams::new(1.0, 1.0, 0.0);
        let result = MakeFracturedRectangle::new(params, FractureTagging::Domain).execute("zero");
        assert!(matches!(
            result,
            Err(TagmeshError::InvalidParameter(ParameterError::NotPositive {
                parameter: "mesh_size",
                ..
            }))
        ));
    }
}
