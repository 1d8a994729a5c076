//! Rebuild nested data from entity tables
//!
//! Entity tables can be cyclic (a user's articles point back to the user). The
//! entities on the current path are tracked and a reference back to one of
//! them is left as the bare id, so expansion always terminates.

use crate::normalize::NormalizeError;
use crate::schema::{Schema, Shape};
use crate::types::Entities;
use serde_json::Value;

/// Expand `result` (an id or list of ids of the given shape) using `entities`
///
/// Ids missing from the tables are left as they are.
pub fn denormalize(
    result: &Value,
    root: &Shape,
    entities: &Entities,
    schema: &Schema,
) -> Result<Value, NormalizeError> {
    let mut expander = Expander {
        schema,
        entities,
        path: Vec::new(),
    };
    expander.expand_shape(result, root)
}

struct Expander<'a> {
    schema: &'a Schema,
    entities: &'a Entities,
    /// (entity type, id) of every entity being expanded
    path: Vec<(&'a str, String)>,
}

impl<'a> Expander<'a> {
    fn expand_shape(&mut self, value: &Value, shape: &'a Shape) -> Result<Value, NormalizeError> {
        match (shape, value) {
            (Shape::One(entity), id) => self.expand(id, entity),
            (Shape::Many(entity), Value::Array(ids)) => ids
                .iter()
                .map(|id| self.expand(id, entity))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            (Shape::Many(_), other) => Ok(other.clone()),
        }
    }

    fn expand(&mut self, id: &Value, key: &'a str) -> Result<Value, NormalizeError> {
        let entity = self
            .schema
            .get(key)
            .ok_or_else(|| NormalizeError::UnknownEntity {
                entity: key.to_string(),
                path: self.describe_path(),
            })?;

        let id_key = match id {
            Value::String(id) => id.clone(),
            Value::Number(id) => id.to_string(),
            other => return Ok(other.clone()),
        };

        if self.path.iter().any(|(k, i)| *k == key && *i == id_key) {
            log::trace!("Cycle at {} {}, keeping the id", key, id_key);
            return Ok(id.clone());
        }

        let Some(record) = self.entities.get(key).and_then(|table| table.get(&id_key)) else {
            return Ok(id.clone());
        };
        let Value::Object(fields) = record else {
            return Ok(record.clone());
        };

        self.path.push((key, id_key));
        let mut expanded = fields.clone();
        for (field, shape) in entity.relations() {
            if let Some(value) = fields.get(field) {
                let value = self.expand_shape(value, shape)?;
                expanded.insert(field.to_string(), value);
            }
        }
        self.path.pop();

        Ok(Value::Object(expanded))
    }

    fn describe_path(&self) -> String {
        self.path
            .iter()
            .map(|(key, id)| format!("{}[{}]", key, id))
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::schema::Entity;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_denormalize_restores_nested_data() {
        let schema = Schema::new()
            .entity(Entity::new("users"))
            .entity(Entity::new("comments").one("commenter", "users"))
            .entity(
                Entity::new("articles")
                    .one("author", "users")
                    .many("comments", "comments"),
            );
        let data = json!({
            "id": "123",
            "author": {"id": "1", "name": "James"},
            "comments": [{"id": "324", "commenter": {"id": "2", "name": "Nicole"}}]
        });

        let root = Shape::one("articles");
        let normalized = normalize(&data, &schema, &root).unwrap();
        let restored = denormalize(&normalized.result, &root, &normalized.entities, &schema).unwrap();

        assert_eq!(restored, data);
    }

    #[test]
    fn test_cyclic_entities_stop_at_the_repeated_entity() {
        let schema = Schema::new()
            .entity(Entity::new("users").many("articles", "articles"))
            .entity(Entity::new("articles").one("author", "users"));
        let mut entities = Entities::new();
        entities
            .entry("users".to_string())
            .or_default()
            .insert("1".to_string(), json!({"id": "1", "articles": ["10"]}));
        entities
            .entry("articles".to_string())
            .or_default()
            .insert("10".to_string(), json!({"id": "10", "author": "1"}));

        let user = denormalize(&json!("1"), &Shape::one("users"), &entities, &schema).unwrap();

        assert_eq!(
            user,
            json!({"id": "1", "articles": [{"id": "10", "author": "1"}]})
        );
    }

    #[test]
    fn test_missing_ids_are_kept() {
        let schema = Schema::new().entity(Entity::new("users"));
        let users = denormalize(
            &json!(["1", null]),
            &Shape::many("users"),
            &Entities::new(),
            &schema,
        )
        .unwrap();
        assert_eq!(users, json!(["1", null]));
    }

    #[test]
    fn test_unknown_entity_type() {
        let err = denormalize(&json!("1"), &Shape::one("ghosts"), &Entities::new(), &Schema::new())
            .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnknownEntity {
                entity: "ghosts".to_string(),
                path: String::new(),
            }
        );
    }
}
