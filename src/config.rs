//! Crate-wide configuration constants.
//!
//! Runtime engine settings live in [`crate::engine::GmshConfig`]; everything
//! here is fixed at compile time.

/// Inclination of the fracture line from horizontal, in degrees.
///
/// The fractured rectangle always uses this angle; it is not a builder
/// parameter.
pub const FRACTURE_ANGLE_DEG: f64 = 30.0;

/// Extension of the engine's native mesh format.
pub const MESH_EXTENSION: &str = "msh";

/// Extension of the geometry script handed to Gmsh.
pub const SCRIPT_EXTENSION: &str = "geo";

/// Executable looked up on `PATH` when no override is configured.
pub const DEFAULT_GMSH_EXECUTABLE: &str = "gmsh";

/// Environment variable overriding the Gmsh executable.
pub const GMSH_EXECUTABLE_ENV: &str = "GMSH_EXECUTABLE";

/// Gmsh `General.Verbosity` used unless configured otherwise (0 = silent).
pub const DEFAULT_GMSH_VERBOSITY: u8 = 0;

/// Prefix of the per-session scratch directory.
pub const SESSION_DIR_PREFIX: &str = ".tagmesh-";

/// Returns the fracture angle in radians.
#[must_use]
pub fn fracture_angle() -> f64 {
    FRACTURE_ANGLE_DEG.to_radians()
}
