use std::collections::{HashMap, HashSet};

use crate::error::{Result, TopologyError};
use crate::topology::{EdgeId, FaceLoopData, FaceLoopId, OrientedFace, TopologyStore};

/// Creates a closed shell from oriented faces.
pub struct MakeFaceLoop {
    faces: Vec<OrientedFace>,
}

impl MakeFaceLoop {
    /// Creates a new `MakeFaceLoop` operation.
    #[must_use]
    pub fn new(faces: Vec<OrientedFace>) -> Self {
        Self { faces }
    }

    /// Executes the operation, creating the face loop in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ShellNotClosed`] unless every boundary edge of
    /// the faces is used by exactly two faces with opposite orientation.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceLoopId> {
        check_watertight(store, &self.faces)?;
        Ok(store.add_face_loop(FaceLoopData {
            faces: self.faces.clone(),
        }))
    }
}

/// Checks that the signed boundaries of `faces` cancel edge by edge.
pub(crate) fn check_watertight(
    store: &TopologyStore,
    faces: &[OrientedFace],
) -> std::result::Result<(), TopologyError> {
    if faces.is_empty() {
        return Err(TopologyError::ShellNotClosed("no faces".into()));
    }

    let mut seen = HashSet::with_capacity(faces.len());
    // edge -> (number of uses, sum of signed uses)
    let mut uses: HashMap<EdgeId, (usize, i32)> = HashMap::new();
    for (i, of) in faces.iter().enumerate() {
        if !seen.insert(of.id) {
            return Err(TopologyError::ShellNotClosed(format!(
                "face at position {i} is listed twice"
            )));
        }
        let face = store.face(of.id)?;
        for &lp in std::iter::once(&face.outer_loop).chain(&face.inner_loops) {
            for oe in &store.edge_loop(lp)?.edges {
                let entry = uses.entry(oe.id).or_default();
                entry.0 += 1;
                entry.1 += i32::from(of.sign() * oe.sign());
            }
        }
    }

    for (edge, (count, sum)) in &uses {
        if *count != 2 {
            return Err(TopologyError::ShellNotClosed(format!(
                "edge {edge:?} bounds {count} faces instead of 2"
            )));
        }
        if *sum != 0 {
            return Err(TopologyError::ShellNotClosed(format!(
                "edge {edge:?} is traversed in the same direction by both adjoining faces"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TagmeshError;
    use crate::operations::creation::fixtures::tetrahedron;

    #[test]
    fn tetrahedron_closes() {
        let mut store = TopologyStore::new();
        let faces = tetrahedron(&mut store);
        let shell = MakeFaceLoop::new(faces.iter().map(|&f| f.into()).collect())
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.face_loop(shell).unwrap().faces.len(), 4);
    }

    #[test]
    fn missing_face_leaves_shell_open() {
        let mut store = TopologyStore::new();
        let faces = tetrahedron(&mut store);
        let result = MakeFaceLoop::new(faces[..3].iter().map(|&f| f.into()).collect())
            .execute(&mut store);
        assert!(matches!(
            result,
            Err(TagmeshError::DegenerateTopology(TopologyError::ShellNotClosed(_)))
        ));
    }

    #[test]
    fn one_flipped_face_is_rejected() {
        let mut store = TopologyStore::new();
        let faces = tetrahedron(&mut store);
        let mut oriented: Vec<OrientedFace> = faces.iter().map(|&f| f.into()).collect();
        oriented[2] = -oriented[2];
        let result = MakeFaceLoop::new(oriented).execute(&mut store);
        assert!(matches!(
            result,
            Err(TagmeshError::DegenerateTopology(TopologyError::ShellNotClosed(_)))
        ));
        assert_eq!(store.counts().face_loops, 0);
    }

    #[test]
    fn duplicated_face_is_rejected() {
        let mut store = TopologyStore::new();
        let faces = tetrahedron(&mut store);
        let mut oriented: Vec<OrientedFace> = faces.iter().map(|&f| f.into()).collect();
        oriented.push(oriented[0]);
        assert!(MakeFaceLoop::new(oriented).execute(&mut store).is_err());
    }
}
