//! Meshing engine adapters.
//!
//! An engine is used through a [`EngineSession`] opened per model. The
//! session owns every resource the engine needs and releases them when it is
//! dropped, whether or not meshing succeeded.

mod geo;
mod gmsh;

pub use geo::GeoScript;
pub use gmsh::{GmshCli, GmshConfig, GmshSession};

use std::path::Path;

use crate::error::EngineError;
use crate::model::Model;
use crate::tags::Dimension;

/// A meshing engine able to open independent sessions.
pub trait MeshEngine {
    /// Session type holding the engine state for one model.
    type Session: EngineSession;

    /// Opens a session whose result will be written to `output`.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the session resources cannot be acquired.
    fn open(&self, output: &Path) -> Result<Self::Session, EngineError>;
}

/// One engine session: load a model, mesh it, write the result.
///
/// Nothing is written to the final output path before [`write`] succeeds.
///
/// [`write`]: EngineSession::write
pub trait EngineSession {
    /// Hands the model geometry and tags to the engine.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine rejects the model.
    fn load(&mut self, model: &Model) -> Result<(), EngineError>;

    /// Generates a mesh of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if no model was loaded or meshing fails.
    fn generate(&mut self, dimension: Dimension) -> Result<(), EngineError>;

    /// Moves the generated mesh to its final location and closes the session.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if no mesh was generated or it cannot be
    /// moved into place.
    fn write(self, path: &Path) -> Result<(), EngineError>;
}
