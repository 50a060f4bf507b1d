use super::{Point2, Point3, Vector3, TOLERANCE};

/// Vector area of a closed polygon (Newell's method).
///
/// The direction is the polygon normal given by the right-hand rule over the
/// vertex order; the length is the enclosed area. Works for any planar
/// polygon regardless of the plane it lies in.
#[must_use]
pub fn area_vector(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut sum = Vector3::zeros();
    if n < 3 {
        return sum;
    }
    // Relative to the first vertex, so far-off polygons keep their precision.
    let base = points[0];
    for i in 0..n {
        let curr = points[i] - base;
        let next = points[(i + 1) % n] - base;
        sum.x += (curr.y - next.y) * (curr.z + next.z);
        sum.y += (curr.z - next.z) * (curr.x + next.x);
        sum.z += (curr.x - next.x) * (curr.y + next.y);
    }
    sum * 0.5
}

/// Diagonal of the axis-aligned box around `points`, the characteristic
/// length tolerances are scaled by. Zero for fewer than two distinct points.
#[must_use]
pub fn extent(points: &[Point3]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (lo, hi) = points
        .iter()
        .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
    (hi - lo).norm()
}

/// Unit normal of a polygon, or `None` if its area is negligible against
/// the square of its extent.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let area = area_vector(points);
    let len = area.norm();
    let scale = extent(points);
    (len > TOLERANCE * scale * scale).then(|| area / len)
}

/// Area of a planar polygon.
#[must_use]
pub fn polygon_area(points: &[Point3]) -> f64 {
    area_vector(points).norm()
}

/// Arithmetic mean of a point set.
#[must_use]
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}

/// Signed distance from `point` to the plane through `origin` with unit `normal`.
/// Positive on the normal side.
#[must_use]
pub fn signed_distance_to_plane(point: &Point3, origin: &Point3, normal: &Vector3) -> f64 {
    normal.dot(&(point - origin))
}

/// Projects coplanar 3D points into 2D coordinates of their plane.
///
/// The in-plane axes are chosen from `normal` so that the projection keeps
/// the polygon's winding (counter-clockwise around `normal` stays
/// counter-clockwise in 2D).
#[must_use]
pub fn project_to_plane(points: &[Point3], normal: &Vector3) -> Vec<Point2> {
    let reference = if normal.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u_dir = reference.cross(normal).cross(normal).normalize() * -1.0;
    let v_dir = normal.cross(&u_dir);
    let origin = points.first().copied().unwrap_or_else(Point3::origin);
    points
        .iter()
        .map(|p| {
            let d = p - origin;
            Point2::new(d.dot(&u_dir), d.dot(&v_dir))
        })
        .collect()
}

/// Bounded segment-segment intersection in 2D, endpoints included.
#[must_use]
pub fn segments_intersect_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let da = a1 - a0;
    let db = b1 - b0;
    let cross = da.x * db.y - da.y * db.x;
    let d = b0 - a0;
    let (la, lb) = (da.norm(), db.norm());
    if la <= 0.0 || lb <= 0.0 {
        return false;
    }

    if cross.abs() <= TOLERANCE * la * lb {
        // Parallel: only an overlap of collinear segments counts.
        let collinear = (d.x * da.y - d.y * da.x).abs() <= TOLERANCE * la * d.norm().max(la);
        if !collinear {
            return false;
        }
        let len2 = la * la;
        let t0 = d.dot(&da) / len2;
        let t1 = (b1 - a0).dot(&da) / len2;
        let (lo, hi) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
        return hi >= -TOLERANCE && lo <= 1.0 + TOLERANCE;
    }

    let t = (d.x * db.y - d.y * db.x) / cross;
    let u = (d.x * da.y - d.y * da.x) / cross;
    let eps = TOLERANCE;
    t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps
}

/// Six times the signed volume of the tetrahedron `(origin, a, b, c)`.
#[must_use]
pub fn tetra_volume6(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    a.coords.dot(&b.coords.cross(&c.coords))
}
