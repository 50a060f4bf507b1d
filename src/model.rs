use std::fmt;

use crate::tags::{Dimension, TagSet};
use crate::topology::{EntityCounts, TopologyStore};

/// A fully built, tagged shape ready to be handed to a meshing engine.
#[derive(Debug)]
pub struct Model {
    name: String,
    dimension: Dimension,
    mesh_size: f64,
    store: TopologyStore,
    tags: TagSet,
}

impl Model {
    /// Bundles a topology store with its tags.
    ///
    /// `dimension` is the dimension of the mesh to generate: [`Dimension::Face`]
    /// for planar shapes, [`Dimension::Volume`] for solids.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        dimension: Dimension,
        mesh_size: f64,
        store: TopologyStore,
        tags: TagSet,
    ) -> Self {
        Self {
            name: name.into(),
            dimension,
            mesh_size,
            store,
            tags,
        }
    }

    /// Model name, used by the engine as its internal model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimension of the mesh to generate.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Global target element size.
    #[must_use]
    pub fn mesh_size(&self) -> f64 {
        self.mesh_size
    }

    /// The model's entities.
    #[must_use]
    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    /// The model's named groups.
    #[must_use]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Entity counts and tag sizes, for logging and quick inspection.
    #[must_use]
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            counts: self.store.counts(),
            tags: self
                .tags
                .iter()
                .map(|t| (t.dimension(), t.name().to_owned(), t.len()))
                .collect(),
        }
    }
}

/// Compact description of a [`Model`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    /// Number of entities of each kind.
    pub counts: EntityCounts,
    /// `(dimension, name, size)` of every tag in assignment order.
    pub tags: Vec<(Dimension, String, usize)>,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counts;
        write!(
            f,
            "{} points, {} edges, {} edge loops, {} faces, {} face loops, {} volumes",
            c.points, c.edges, c.edge_loops, c.faces, c.face_loops, c.volumes
        )?;
        for (dim, name, len) in &self.tags {
            write!(f, "; {name}[{dim}]x{len}")?;
        }
        Ok(())
    }
}
