//! Named groups of entities ("physical groups" in Gmsh terms).
//!
//! Tags are the only way downstream finite-element code identifies geometry,
//! so a [`TagSet`] only accepts groups that are non-empty, reference live
//! entities of a single dimension, and have a name unique within that
//! dimension.

use std::fmt;

use crate::error::TopologyError;
use crate::topology::{EdgeId, FaceId, PointId, TopologyStore, VolumeId};

/// Topological dimension of a tagged entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Point = 0,
    Edge = 1,
    Face = 2,
    Volume = 3,
}

impl Dimension {
    /// All dimensions in ascending order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Point,
        Dimension::Edge,
        Dimension::Face,
        Dimension::Volume,
    ];

    /// The integer dimension (0 to 3).
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A reference to one entity of any dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Point(PointId),
    Edge(EdgeId),
    Face(FaceId),
    Volume(VolumeId),
}

impl Entity {
    /// Dimension of the referenced entity.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Entity::Point(_) => Dimension::Point,
            Entity::Edge(_) => Dimension::Edge,
            Entity::Face(_) => Dimension::Face,
            Entity::Volume(_) => Dimension::Volume,
        }
    }

    fn exists_in(&self, store: &TopologyStore) -> bool {
        match *self {
            Entity::Point(id) => store.point(id).is_ok(),
            Entity::Edge(id) => store.edge(id).is_ok(),
            Entity::Face(id) => store.face(id).is_ok(),
            Entity::Volume(id) => store.volume(id).is_ok(),
        }
    }
}

impl From<PointId> for Entity {
    fn from(id: PointId) -> Self {
        Entity::Point(id)
    }
}

impl From<EdgeId> for Entity {
    fn from(id: EdgeId) -> Self {
        Entity::Edge(id)
    }
}

impl From<FaceId> for Entity {
    fn from(id: FaceId) -> Self {
        Entity::Face(id)
    }
}

impl From<VolumeId> for Entity {
    fn from(id: VolumeId) -> Self {
        Entity::Volume(id)
    }
}

/// A named group of entities sharing one dimension.
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    dimension: Dimension,
    entities: Vec<Entity>,
}

impl Tag {
    /// Name downstream code looks the group up by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimension shared by every tagged entity.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Tagged entities in the order they were given.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of tagged entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always `false`: empty tags are rejected on creation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Whether `entity` belongs to this tag.
    #[must_use]
    pub fn contains(&self, entity: impl Into<Entity>) -> bool {
        let entity = entity.into();
        self.entities.contains(&entity)
    }
}

/// The tags attached to one model, in assignment order.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags `entities` under `name`.
    ///
    /// The dimension is taken from the entities themselves.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTag`] if the name is blank or already
    /// used in that dimension, the group is empty, mixes dimensions or lists
    /// an entity twice, and [`TopologyError::EntityNotFound`] if an entity is
    /// not in `store`.
    pub fn assign<I, E>(
        &mut self,
        store: &TopologyStore,
        name: &str,
        entities: I,
    ) -> Result<&Tag, TopologyError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entity>,
    {
        let invalid = |reason: &str| TopologyError::InvalidTag {
            name: name.to_owned(),
            reason: reason.to_owned(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name is blank"));
        }
        let entities: Vec<Entity> = entities.into_iter().map(Into::into).collect();
        let Some(first) = entities.first() else {
            return Err(invalid("no entities"));
        };
        let dimension = first.dimension();

        for (i, entity) in entities.iter().enumerate() {
            if entity.dimension() != dimension {
                return Err(invalid("entities of different dimensions"));
            }
            if entities[..i].contains(entity) {
                return Err(invalid("entity listed twice"));
            }
            if !entity.exists_in(store) {
                return Err(TopologyError::EntityNotFound("tagged entity"));
            }
        }
        if self.get(dimension, name).is_some() {
            return Err(invalid("name already used in this dimension"));
        }

        self.tags.push(Tag {
            name: name.to_owned(),
            dimension,
            entities,
        });
        Ok(&self.tags[self.tags.len() - 1])
    }

    /// Looks up a tag by dimension and name.
    #[must_use]
    pub fn get(&self, dimension: Dimension, name: &str) -> Option<&Tag> {
        self.tags
            .iter()
            .find(|t| t.dimension == dimension && t.name == name)
    }

    /// Tags of one dimension, in assignment order.
    pub fn of_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(move |t| t.dimension == dimension)
    }

    /// All tags in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tag has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Re-checks that every tagged entity still exists in `store`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] naming the first dangling tag.
    pub fn check(&self, store: &TopologyStore) -> Result<(), TopologyError> {
        for tag in &self.tags {
            if tag.entities.is_empty() {
                return Err(TopologyError::InvalidTag {
                    name: tag.name.clone(),
                    reason: "no entities".into(),
                });
            }
            if tag.entities.iter().any(|e| !e.exists_in(store)) {
                return Err(TopologyError::EntityNotFound("tagged entity"));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
