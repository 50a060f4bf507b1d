use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for tagmesh.
///
/// Every failure falls into one of three classes: bad user input (rejected
/// before any geometry exists), inconsistent topology (rejected before the
/// engine is called), or a failure reported by the meshing engine itself.
#[derive(Debug, Error)]
pub enum TagmeshError {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    #[error(transparent)]
    DegenerateTopology(#[from] TopologyError),

    #[error("meshing engine failed on model `{model}`: {source}")]
    EngineFailure {
        /// Name of the model the engine was working on.
        model: String,
        #[source]
        source: EngineError,
    },
}

impl TagmeshError {
    /// Wraps an engine error with the name of the offending model.
    #[must_use]
    pub fn engine(model: impl Into<String>, source: EngineError) -> Self {
        Self::EngineFailure {
            model: model.into(),
            source,
        }
    }
}

/// Errors raised while validating user-supplied parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be strictly positive")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is not finite")]
    NotFinite { parameter: &'static str, value: f64 },

    #[error("unknown tagging mode `{0}` (expected `domain` or `BC`)")]
    UnknownMode(String),

    #[error("fracture spans {rise} vertically but the rectangle is only {height} high")]
    FractureOutOfBounds { rise: f64, height: f64 },

    #[error("output path `{}` has no usable file stem", .0.display())]
    InvalidPath(PathBuf),
}

/// Errors related to topological construction and validation.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("edge endpoints coincide")]
    DegenerateEdge,

    #[error("edge loop is empty")]
    EmptyLoop,

    #[error("edge loop is not closed between positions {position} and {next}")]
    LoopNotClosed { position: usize, next: usize },

    #[error("edge loop uses the same edge at positions {first} and {second}")]
    RepeatedEdge { first: usize, second: usize },

    #[error("edge loop crosses itself between positions {first} and {second}")]
    SelfIntersectingLoop { first: usize, second: usize },

    #[error("degenerate face: {0}")]
    DegenerateFace(String),

    #[error("face loop is not a closed shell: {0}")]
    ShellNotClosed(String),

    #[error("volume is inverted or empty (signed volume {0})")]
    InvertedVolume(f64),

    #[error("invalid tag `{name}`: {reason}")]
    InvalidTag { name: String, reason: String },
}

/// Errors reported by a meshing engine adapter.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not launch `{}`: {source}", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("engine exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("engine produced no mesh at `{}`", .0.display())]
    MissingOutput(PathBuf),

    #[error("session used out of order: {0}")]
    Session(&'static str),

    #[error("model references a {0} that was never serialized")]
    Unresolved(&'static str),
}

/// Convenience type alias for results using [`TagmeshError`].
pub type Result<T> = std::result::Result<T, TagmeshError>;
