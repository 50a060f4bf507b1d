//! Gmsh `.geo` script serialization (built-in kernel).
//!
//! Entities are numbered from 1 per kind in creation order. Signed
//! references are written as negative numbers, the way Gmsh expects them in
//! curve and surface loops.

use std::fmt::Display;
use std::io::Write;

use slotmap::{Key, SecondaryMap};

use crate::config::DEFAULT_GMSH_VERBOSITY;
use crate::error::EngineError;
use crate::model::Model;
use crate::tags::{Dimension, Entity};
use crate::topology::Oriented;

/// Gmsh keyword of a physical group for each dimension.
fn physical_keyword(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Point => "Physical Point",
        Dimension::Edge => "Physical Curve",
        Dimension::Face => "Physical Surface",
        Dimension::Volume => "Physical Volume",
    }
}

/// Maps arena keys to the 1-based numbers used in the script.
struct Numbering<K: Key> {
    numbers: SecondaryMap<K, usize>,
    kind: &'static str,
}

impl<K: Key> Numbering<K> {
    fn new(keys: impl Iterator<Item = K>, kind: &'static str) -> Self {
        let mut numbers = SecondaryMap::new();
        for (i, key) in keys.enumerate() {
            numbers.insert(key, i + 1);
        }
        Self { numbers, kind }
    }

    fn get(&self, key: K) -> Result<usize, EngineError> {
        self.numbers
            .get(key)
            .copied()
            .ok_or(EngineError::Unresolved(self.kind))
    }

    fn signed(&self, reference: Oriented<K>) -> Result<i64, EngineError> {
        // Script numbers stay far below i64::MAX.
        #[allow(clippy::cast_possible_wrap)]
        let n = self.get(reference.id)? as i64;
        Ok(if reference.forward { n } else { -n })
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A model rendered as a Gmsh geometry script.
///
/// # Examples
///
/// ```
/// use tagmesh::engine::GeoScript;
/// use tagmesh::shapes::{MakeRectangle, RectangleParams};
///
/// let model = MakeRectangle::new(RectangleParams::new(2.0, 1.0, 0.1))
///     .execute("rect")
///     .unwrap();
/// let script = GeoScript::new(&model).render().unwrap();
/// assert!(script.contains("Physical Curve(\"top\") = {1};"));
/// ```
#[derive(Debug)]
pub struct GeoScript<'a> {
    model: &'a Model,
    verbosity: u8,
}

impl<'a> GeoScript<'a> {
    /// Creates a script for `model` with the default verbosity.
    #[must_use]
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            verbosity: DEFAULT_GMSH_VERBOSITY,
        }
    }

    /// Sets the `General.Verbosity` written into the script.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Renders the script into a string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Unresolved`] if the model references an entity
    /// missing from its own store.
    pub fn render(&self) -> Result<String, EngineError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| EngineError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Writes the script to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] on write failure and
    /// [`EngineError::Unresolved`] for dangling references.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), EngineError> {
        let model = self.model;
        let store = model.store();
        let points = Numbering::new(store.points().map(|(id, _)| id), "point");
        let edges = Numbering::new(store.edges().map(|(id, _)| id), "edge");
        let loops = Numbering::new(store.edge_loops().map(|(id, _)| id), "edge loop");
        let faces = Numbering::new(store.faces().map(|(id, _)| id), "face");
        let shells = Numbering::new(store.face_loops().map(|(id, _)| id), "face loop");
        let volumes = Numbering::new(store.volumes().map(|(id, _)| id), "volume");

        writeln!(writer, "// model \"{}\"", model.name())?;
        writeln!(writer, "General.Verbosity = {};", self.verbosity)?;
        writeln!(writer, "Mesh.CharacteristicLengthMin = {};", model.mesh_size())?;
        writeln!(writer, "Mesh.CharacteristicLengthMax = {};", model.mesh_size())?;
        writeln!(writer)?;

        for (id, point) in store.points() {
            let p = point.position;
            writeln!(
                writer,
                "Point({}) = {{{}, {}, {}, {}}};",
                points.get(id)?,
                p.x,
                p.y,
                p.z,
                point.mesh_size
            )?;
        }
        for (id, edge) in store.edges() {
            writeln!(
                writer,
                "Line({}) = {{{}, {}}};",
                edges.get(id)?,
                points.get(edge.start)?,
                points.get(edge.end)?
            )?;
        }
        for (id, lp) in store.edge_loops() {
            let refs = lp
                .edges
                .iter()
                .map(|&oe| edges.signed(oe))
                .collect::<Result<Vec<_>, _>>()?;
            writeln!(writer, "Curve Loop({}) = {{{}}};", loops.get(id)?, join(&refs))?;
        }
        for (id, face) in store.faces() {
            let mut refs = vec![loops.get(face.outer_loop)?];
            for &inner in &face.inner_loops {
                refs.push(loops.get(inner)?);
            }
            writeln!(writer, "Plane Surface({}) = {{{}}};", faces.get(id)?, join(&refs))?;
        }
        for (id, shell) in store.face_loops() {
            let refs = shell
                .faces
                .iter()
                .map(|&of| faces.signed(of))
                .collect::<Result<Vec<_>, _>>()?;
            writeln!(writer, "Surface Loop({}) = {{{}}};", shells.get(id)?, join(&refs))?;
        }
        for (id, volume) in store.volumes() {
            let mut refs = vec![shells.get(volume.outer_loop)?];
            for &inner in &volume.inner_loops {
                refs.push(shells.get(inner)?);
            }
            writeln!(writer, "Volume({}) = {{{}}};", volumes.get(id)?, join(&refs))?;
        }

        if !model.tags().is_empty() {
            writeln!(writer)?;
        }
        for tag in model.tags() {
            let refs = tag
                .entities()
                .iter()
                .map(|&entity| match entity {
                    Entity::Point(id) => points.get(id),
                    Entity::Edge(id) => edges.get(id),
                    Entity::Face(id) => faces.get(id),
                    Entity::Volume(id) => volumes.get(id),
                })
                .collect::<Result<Vec<_>, _>>()?;
            writeln!(
                writer,
                "{}(\"{}\") = {{{}}};",
                physical_keyword(tag.dimension()),
                tag.name(),
                join(&refs)
            )?;
        }
        Ok(())
    }
}
