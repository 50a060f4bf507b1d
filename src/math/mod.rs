pub mod polygon;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Relative geometric tolerance.
///
/// Thresholds are always scaled to the geometry they apply to: lengths by a
/// characteristic length `L`, areas by `L²`, volumes by `L³`.
pub const TOLERANCE: f64 = 1e-10;

/// Whether two positions cannot be told apart at the precision of their
/// coordinates.
#[must_use]
pub fn coincident(a: &Point3, b: &Point3) -> bool {
    let magnitude = a.coords.norm().max(b.coords.norm());
    (b - a).norm() <= f64::EPSILON * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincidence_is_relative_to_magnitude() {
        let origin = Point3::origin();
        assert!(coincident(&origin, &origin));
        assert!(!coincident(&origin, &Point3::new(1e-12, 0.0, 0.0)));
        assert!(!coincident(&Point3::new(1e9, 0.0, 0.0), &Point3::new(1e9, 1e-3, 0.0)));
        assert!(coincident(
            &Point3::new(1.0, 2.0, 3.0),
            &Point3::new(1.0, 2.0, 3.0 + f64::EPSILON)
        ));
    }
}
