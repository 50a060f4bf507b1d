pub mod edge;
pub mod edge_loop;
pub mod face;
pub mod face_loop;
pub mod oriented;
pub mod point;
pub mod volume;

pub use edge::{EdgeData, EdgeId};
pub use edge_loop::{EdgeLoopData, EdgeLoopId};
pub use face::{FaceData, FaceId};
pub use face_loop::{FaceLoopData, FaceLoopId};
pub use oriented::{Oriented, OrientedEdge, OrientedFace};
pub use point::{PointData, PointId};
pub use volume::{VolumeData, VolumeId};

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Central arena that owns all topological entities of one model.
///
/// Entities reference each other via typed IDs (generational indices).
/// Nothing is ever removed, so iteration order is creation order.
#[derive(Debug, Default)]
pub struct TopologyStore {
    points: SlotMap<PointId, PointData>,
    edges: SlotMap<EdgeId, EdgeData>,
    edge_loops: SlotMap<EdgeLoopId, EdgeLoopData>,
    faces: SlotMap<FaceId, FaceData>,
    face_loops: SlotMap<FaceLoopId, FaceLoopData>,
    volumes: SlotMap<VolumeId, VolumeData>,
}

/// Number of entities of each kind held by a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCounts {
    pub points: usize,
    pub edges: usize,
    pub edge_loops: usize,
    pub faces: usize,
    pub face_loops: usize,
    pub volumes: usize,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many entities of each kind the store holds.
    #[must_use]
    pub fn counts(&self) -> EntityCounts {
        EntityCounts {
            points: self.points.len(),
            edges: self.edges.len(),
            edge_loops: self.edge_loops.len(),
            faces: self.faces.len(),
            face_loops: self.face_loops.len(),
            volumes: self.volumes.len(),
        }
    }

    // --- Point operations ---

    /// Inserts a point and returns its ID.
    pub fn add_point(&mut self, data: PointData) -> PointId {
        self.points.insert(data)
    }

    /// Returns a reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn point(&self, id: PointId) -> Result<&PointData, TopologyError> {
        self.points
            .get(id)
            .ok_or(TopologyError::EntityNotFound("point"))
    }

    /// Iterates over all points in creation order.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &PointData)> {
        self.points.iter()
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    ///
    /// Prefer [`MakeEdge`](crate::operations::creation::MakeEdge), which
    /// checks the endpoints first.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or(TopologyError::EntityNotFound("edge"))
    }

    /// Iterates over all edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    /// Start and end point of an edge as traversed by `oriented`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found in the store.
    pub fn oriented_endpoints(
        &self,
        oriented: OrientedEdge,
    ) -> Result<(PointId, PointId), TopologyError> {
        let edge = self.edge(oriented.id)?;
        Ok(if oriented.forward {
            (edge.start, edge.end)
        } else {
            (edge.end, edge.start)
        })
    }

    // --- Edge loop operations ---

    /// Inserts an edge loop and returns its ID.
    pub fn add_edge_loop(&mut self, data: EdgeLoopData) -> EdgeLoopId {
        self.edge_loops.insert(data)
    }

    /// Returns a reference to the edge loop data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge_loop(&self, id: EdgeLoopId) -> Result<&EdgeLoopData, TopologyError> {
        self.edge_loops
            .get(id)
            .ok_or(TopologyError::EntityNotFound("edge loop"))
    }

    /// Iterates over all edge loops in creation order.
    pub fn edge_loops(&self) -> impl Iterator<Item = (EdgeLoopId, &EdgeLoopData)> {
        self.edge_loops.iter()
    }

    /// Positions of the loop's points in traversal order (one per edge).
    ///
    /// # Errors
    ///
    /// Returns an error if the loop or any entity it references is missing.
    pub fn edge_loop_positions(&self, id: EdgeLoopId) -> Result<Vec<Point3>, TopologyError> {
        let edges = &self.edge_loop(id)?.edges;
        let mut positions = Vec::with_capacity(edges.len());
        for &oe in edges {
            let (start, _) = self.oriented_endpoints(oe)?;
            positions.push(self.point(start)?.position);
        }
        Ok(positions)
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or(TopologyError::EntityNotFound("face"))
    }

    /// Iterates over all faces in creation order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceData)> {
        self.faces.iter()
    }

    // --- Face loop operations ---

    /// Inserts a face loop and returns its ID.
    pub fn add_face_loop(&mut self, data: FaceLoopData) -> FaceLoopId {
        self.face_loops.insert(data)
    }

    /// Returns a reference to the face loop data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face_loop(&self, id: FaceLoopId) -> Result<&FaceLoopData, TopologyError> {
        self.face_loops
            .get(id)
            .ok_or(TopologyError::EntityNotFound("face loop"))
    }

    /// Positions of every outer-loop point of every face in the face loop.
    ///
    /// Points shared between faces appear once per face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face loop or any entity it references is missing.
    pub fn face_loop_positions(&self, id: FaceLoopId) -> Result<Vec<Point3>, TopologyError> {
        let mut positions = Vec::new();
        for of in &self.face_loop(id)?.faces {
            let face = self.face(of.id)?;
            positions.extend(self.edge_loop_positions(face.outer_loop)?);
        }
        Ok(positions)
    }

    /// Iterates over all face loops in creation order.
    pub fn face_loops(&self) -> impl Iterator<Item = (FaceLoopId, &FaceLoopData)> {
        self.face_loops.iter()
    }

    // --- Volume operations ---

    /// Inserts a volume and returns its ID.
    pub fn add_volume(&mut self, data: VolumeData) -> VolumeId {
        self.volumes.insert(data)
    }

    /// Returns a reference to the volume data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn volume(&self, id: VolumeId) -> Result<&VolumeData, TopologyError> {
        self.volumes
            .get(id)
            .ok_or(TopologyError::EntityNotFound("volume"))
    }

    /// Iterates over all volumes in creation order.
    pub fn volumes(&self) -> impl Iterator<Item = (VolumeId, &VolumeData)> {
        self.volumes.iter()
    }
}
