//! End-to-end operations: build a shape, then mesh it to a file.
//!
//! The output path's stem names the model and its extension is replaced by
//! the mesh format's. Parameters and topology are checked before the engine
//! is touched, and nothing is written to the output path unless the engine
//! succeeds.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::config::MESH_EXTENSION;
use crate::engine::{EngineSession, MeshEngine};
use crate::error::{EngineError, ParameterError, Result, TagmeshError};
use crate::model::Model;
use crate::operations::query::IsValid;
use crate::shapes::{
    FractureTagging, MakeFracturedRectangle, MakePrism, MakeRectangle, PrismParams,
    RectangleParams,
};

/// Resolves the model name and final mesh path from a user-supplied path.
///
/// # Errors
///
/// Returns [`ParameterError::InvalidPath`] if the path has no UTF-8 file stem.
pub fn resolve_output(path: &Path) -> std::result::Result<(String, PathBuf), ParameterError> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParameterError::InvalidPath(path.to_path_buf()))?;
    Ok((name.to_owned(), path.with_extension(MESH_EXTENSION)))
}

/// Meshes an already built model into `output`.
///
/// The model is validated again first; the engine session is dropped, and
/// its resources released, on every exit path.
///
/// # Errors
///
/// Returns [`TagmeshError::DegenerateTopology`] if the model is inconsistent
/// and [`TagmeshError::EngineFailure`] if the engine fails.
#[instrument(skip(engine, model), fields(model = model.name()))]
pub fn mesh_model<E: MeshEngine>(engine: &E, model: &Model, output: &Path) -> Result<PathBuf> {
    IsValid::new().check(model)?;

    let run = || -> std::result::Result<(), EngineError> {
        let mut session = engine.open(output)?;
        session.load(model)?;
        session.generate(model.dimension())?;
        session.write(output)
    };
    run().map_err(|e| TagmeshError::engine(model.name(), e))?;

    info!(path = %output.display(), "meshed");
    Ok(output.to_path_buf())
}

/// Builds and meshes a rectangle.
///
/// # Errors
///
/// See [`MakeRectangle::execute`] and [`mesh_model`].
pub fn create_rectangle_mesh<E: MeshEngine>(
    engine: &E,
    path: &Path,
    params: RectangleParams,
) -> Result<PathBuf> {
    let (name, output) = resolve_output(path)?;
    let model = MakeRectangle::new(params).execute(&name)?;
    mesh_model(engine, &model, &output)
}

/// Builds and meshes a fractured rectangle with the given tagging.
///
/// # Errors
///
/// See [`MakeFracturedRectangle::execute`] and [`mesh_model`].
pub fn create_fractured_rectangle_mesh<E: MeshEngine>(
    engine: &E,
    path: &Path,
    params: RectangleParams,
    tagging: FractureTagging,
) -> Result<PathBuf> {
    let (name, output) = resolve_output(path)?;
    let model = MakeFracturedRectangle::new(params, tagging).execute(&name)?;
    mesh_model(engine, &model, &output)
}

/// Builds and meshes a rectangular prism.
///
/// # Errors
///
/// See [`MakePrism::execute`] and [`mesh_model`].
pub fn create_prism_mesh<E: MeshEngine>(
    engine: &E,
    path: &Path,
    params: PrismParams,
) -> Result<PathBuf> {
    let (name, output) = resolve_output(path)?;
    let model = MakePrism::new(params).execute(&name)?;
    mesh_model(engine, &model, &output)
}
