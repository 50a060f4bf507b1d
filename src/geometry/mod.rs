mod plane;

pub use plane::Plane;
pub(crate) use plane::planarity_tolerance;
