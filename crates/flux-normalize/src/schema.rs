//! Schema definitions
//!
//! Entities refer to each other by key, so a schema can describe cyclic
//! relationships (an author writing articles that point back to the author).

use std::collections::BTreeMap;

/// Shape of a value: one entity or a list of entities of the given type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    One(String),
    Many(String),
}

impl Shape {
    pub fn one(entity: impl Into<String>) -> Self {
        Shape::One(entity.into())
    }

    pub fn many(entity: impl Into<String>) -> Self {
        Shape::Many(entity.into())
    }

    /// Entity type referenced by this shape
    pub fn entity(&self) -> &str {
        match self {
            Shape::One(entity) | Shape::Many(entity) => entity,
        }
    }
}

/// Description of one entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    key: String,
    id_attribute: String,
    relations: Vec<(String, Shape)>,
}

impl Entity {
    /// Entity stored under `key`, identified by its `id` field
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            id_attribute: "id".to_string(),
            relations: Vec::new(),
        }
    }

    /// Use another field as id
    pub fn id_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.id_attribute = attribute.into();
        self
    }

    /// `field` holds a single entity of type `entity`
    pub fn one(self, field: impl Into<String>, entity: impl Into<String>) -> Self {
        self.relation(field, Shape::one(entity))
    }

    /// `field` holds a list of entities of type `entity`
    pub fn many(self, field: impl Into<String>, entity: impl Into<String>) -> Self {
        self.relation(field, Shape::many(entity))
    }

    fn relation(mut self, field: impl Into<String>, shape: Shape) -> Self {
        let field = field.into();
        self.relations.retain(|(name, _)| *name != field);
        self.relations.push((field, shape));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn id_field(&self) -> &str {
        &self.id_attribute
    }

    pub fn relations(&self) -> impl Iterator<Item = (&str, &Shape)> {
        self.relations.iter().map(|(field, shape)| (field.as_str(), shape))
    }

    pub(crate) fn relation_of(&self, field: &str) -> Option<&Shape> {
        self.relations
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, shape)| shape)
    }
}

/// Registry of entity types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    entities: BTreeMap<String, Entity>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity type, replacing any earlier one with the same key
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.insert(entity.key.clone(), entity);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Entity> {
        self.entities.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }
}
