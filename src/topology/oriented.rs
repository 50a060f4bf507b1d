use std::ops::Neg;

use super::edge::EdgeId;
use super::face::FaceId;

/// An entity reference with a traversal direction.
///
/// `forward == true` uses the entity in its natural orientation, `false`
/// reverses it. Negation flips the direction, so `-oriented` reads like the
/// signed integer references Gmsh scripts use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Oriented<K> {
    /// The referenced entity.
    pub id: K,
    /// Whether the entity is traversed in its natural direction.
    pub forward: bool,
}

/// An edge with orientation information within an edge loop.
pub type OrientedEdge = Oriented<EdgeId>;

/// A face with orientation information within a face loop.
pub type OrientedFace = Oriented<FaceId>;

impl<K: Copy> Oriented<K> {
    /// Creates a new oriented reference.
    #[must_use]
    pub fn new(id: K, forward: bool) -> Self {
        Self { id, forward }
    }

    /// References `id` in its natural direction.
    #[must_use]
    pub fn forward(id: K) -> Self {
        Self::new(id, true)
    }

    /// References `id` against its natural direction.
    #[must_use]
    pub fn reversed(id: K) -> Self {
        Self::new(id, false)
    }

    /// `+1` for forward references, `-1` for reversed ones.
    #[must_use]
    pub fn sign(&self) -> i8 {
        if self.forward {
            1
        } else {
            -1
        }
    }
}

impl<K: Copy> Neg for Oriented<K> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.id, !self.forward)
    }
}

impl From<EdgeId> for OrientedEdge {
    fn from(id: EdgeId) -> Self {
        Self::forward(id)
    }
}

impl From<FaceId> for OrientedFace {
    fn from(id: FaceId) -> Self {
        Self::forward(id)
    }
}
