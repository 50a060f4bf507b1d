//! Gmsh adapter driving the `gmsh` command-line executable.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use tracing::{debug, info};

use super::{EngineSession, GeoScript, MeshEngine};
use crate::config::{
    DEFAULT_GMSH_EXECUTABLE, DEFAULT_GMSH_VERBOSITY, GMSH_EXECUTABLE_ENV, MESH_EXTENSION,
    SCRIPT_EXTENSION, SESSION_DIR_PREFIX,
};
use crate::error::EngineError;
use crate::model::Model;
use crate::tags::Dimension;

/// Runtime settings of the Gmsh adapter.
#[derive(Debug, Clone)]
pub struct GmshConfig {
    /// Executable to run.
    pub executable: PathBuf,
    /// `General.Verbosity` and `-v` level.
    pub verbosity: u8,
    /// Extra command-line arguments appended after the standard ones.
    pub extra_args: Vec<OsString>,
}

impl Default for GmshConfig {
    /// Uses `$GMSH_EXECUTABLE` if set, otherwise `gmsh` from `PATH`.
    fn default() -> Self {
        let executable = std::env::var_os(GMSH_EXECUTABLE_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_GMSH_EXECUTABLE), PathBuf::from);
        Self {
            executable,
            verbosity: DEFAULT_GMSH_VERBOSITY,
            extra_args: Vec::new(),
        }
    }
}

/// Meshing engine backed by the Gmsh executable.
#[derive(Debug, Clone, Default)]
pub struct GmshCli {
    config: GmshConfig,
}

impl GmshCli {
    /// Creates an adapter with the given configuration.
    #[must_use]
    pub fn new(config: GmshConfig) -> Self {
        Self { config }
    }

    /// The adapter's configuration.
    #[must_use]
    pub fn config(&self) -> &GmshConfig {
        &self.config
    }
}

impl MeshEngine for GmshCli {
    type Session = GmshSession;

    /// Creates the session scratch directory next to `output`, so the final
    /// move stays on one filesystem.
    fn open(&self, output: &Path) -> Result<GmshSession, EngineError> {
        let parent = match output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let scratch = tempfile::Builder::new()
            .prefix(SESSION_DIR_PREFIX)
            .tempdir_in(parent)?;
        debug!(scratch = %scratch.path().display(), "gmsh session opened");
        Ok(GmshSession {
            config: self.config.clone(),
            scratch,
            script: None,
            mesh: None,
        })
    }
}

/// A Gmsh session owning a scratch directory.
///
/// The directory and everything staged in it are removed when the session
/// is dropped or written.
#[derive(Debug)]
pub struct GmshSession {
    config: GmshConfig,
    scratch: TempDir,
    script: Option<PathBuf>,
    mesh: Option<PathBuf>,
}

impl GmshSession {
    /// Scratch directory of this session.
    #[must_use]
    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }
}

impl EngineSession for GmshSession {
    fn load(&mut self, model: &Model) -> Result<(), EngineError> {
        let path = self
            .scratch
            .path()
            .join(format!("{}.{SCRIPT_EXTENSION}", model.name()));
        let mut writer = BufWriter::new(File::create(&path)?);
        GeoScript::new(model)
            .with_verbosity(self.config.verbosity)
            .write_to(&mut writer)?;
        writer.flush()?;
        debug!(script = %path.display(), "geometry script written");
        self.script = Some(path);
        self.mesh = None;
        Ok(())
    }

    fn generate(&mut self, dimension: Dimension) -> Result<(), EngineError> {
        let script = self
            .script
            .as_ref()
            .ok_or(EngineError::Session("generate called before load"))?;
        let staged = script.with_extension(MESH_EXTENSION);

        info!(
            executable = %self.config.executable.display(),
            dimension = dimension.as_u8(),
            "running gmsh"
        );
        let output = Command::new(&self.config.executable)
            .arg(script)
            .arg(format!("-{}", dimension.as_u8()))
            .args(["-format", MESH_EXTENSION])
            .arg("-o")
            .arg(&staged)
            .arg("-v")
            .arg(self.config.verbosity.to_string())
            .args(&self.config.extra_args)
            .output()
            .map_err(|source| EngineError::Launch {
                program: self.config.executable.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        if !staged.is_file() {
            return Err(EngineError::MissingOutput(staged));
        }
        self.mesh = Some(staged);
        Ok(())
    }

    fn write(self, path: &Path) -> Result<(), EngineError> {
        let staged = self
            .mesh
            .as_ref()
            .ok_or(EngineError::Session("write called before generate"))?;
        fs::rename(staged, path)?;
        info!(path = %path.display(), "mesh written");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shapes::{MakeRectangle, RectangleParams};

    fn model() -> Model {
        MakeRectangle::new(RectangleParams::new(1.0, 1.0, 0.2))
            .execute("square")
            .unwrap()
    }

    fn cli(executable: &str) -> GmshCli {
        GmshCli::new(GmshConfig {
            executable: PathBuf::from(executable),
            ..GmshConfig::default()
        })
    }

    #[test]
    fn load_writes_script_and_drop_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("square.msh");
        let mut session = cli("gmsh").open(&output).unwrap();
        session.load(&model()).unwrap();

        let scratch = session.scratch_dir().to_path_buf();
        let script = fs::read_to_string(scratch.join("square.geo")).unwrap();
        assert!(script.contains("Plane Surface(1) = {1};"));

        drop(session);
        assert!(!scratch.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn out_of_order_calls_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("square.msh");
        let mut session = cli("gmsh").open(&output).unwrap();
        assert!(matches!(
            session.generate(Dimension::Face),
            Err(EngineError::Session(_))
        ));
        assert!(matches!(session.write(&output), Err(EngineError::Session(_))));
        assert!(!output.exists());
    }

    #[test]
    fn missing_executable_is_a_launch_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("square.msh");
        let mut session = cli("/nonexistent/tagmesh-gmsh").open(&output).unwrap();
        session.load(&model()).unwrap();
        assert!(matches!(
            session.generate(Dimension::Face),
            Err(EngineError::Launch { .. })
        ));
        drop(session);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
