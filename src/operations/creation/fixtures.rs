//! Small closed shells shared by the creation tests.

#![allow(clippy::unwrap_used)]

use crate::math::{Point3, Vector3};
use crate::topology::{EdgeId, FaceId, OrientedEdge, PointData, TopologyStore};

use super::{MakeEdge, MakeEdgeLoop, MakeFace};

/// Builds the four outward-facing triangles of the unit corner tetrahedron
/// `(0,0,0) (1,0,0) (0,1,0) (0,0,1)`.
pub(crate) fn tetrahedron(store: &mut TopologyStore) -> Vec<FaceId> {
    tetrahedron_scaled(store, 1.0, Point3::origin())
}

/// The corner tetrahedron scaled by `size` and moved to `corner`.
pub(crate) fn tetrahedron_scaled(
    store: &mut TopologyStore,
    size: f64,
    corner: Point3,
) -> Vec<FaceId> {
    let p: Vec<_> = [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| {
        let position = corner + size * Vector3::new(x, y, z);
        store.add_point(PointData::new(position, size / 2.0).unwrap())
    })
    .collect();

    let mut edge =
        |a: usize, b: usize| -> EdgeId { MakeEdge::new(p[a], p[b]).execute(store).unwrap() };
    let e01 = edge(0, 1);
    let e02 = edge(0, 2);
    let e03 = edge(0, 3);
    let e12 = edge(1, 2);
    let e13 = edge(1, 3);
    let e23 = edge(2, 3);

    let f = |e: EdgeId| OrientedEdge::forward(e);
    let r = |e: EdgeId| OrientedEdge::reversed(e);
    let loops = [
        vec![f(e02), r(e12), r(e01)],
        vec![f(e01), f(e13), r(e03)],
        vec![f(e03), r(e23), r(e02)],
        vec![f(e12), f(e23), r(e13)],
    ];

    loops
        .into_iter()
        .map(|edges| {
            let lp = MakeEdgeLoop::new(edges).execute(store).unwrap();
            MakeFace::new(lp, vec![]).execute(store).unwrap()
        })
        .collect()
}
