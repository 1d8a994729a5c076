//! Normalization walk
//!
//! The input is walked with an explicit work stack, so arbitrarily deep input
//! does not grow the call stack. Each visited entity is flattened (relationship
//! fields replaced by ids) and merged into its table.

use crate::schema::{Entity, Schema, Shape};
use crate::types::Normalized;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur during normalization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("unknown entity type \"{entity}\" at {path}")]
    UnknownEntity { entity: String, path: String },

    #[error("{entity} at {path} has no string or number \"{attribute}\"")]
    MissingId {
        entity: String,
        attribute: String,
        path: String,
    },

    #[error("expected a {entity} object at {path}")]
    NotAnObject { entity: String, path: String },

    #[error("expected a list of {entity} at {path}")]
    NotAnArray { entity: String, path: String },
}

/// One entity waiting to be flattened
struct Visit<'a> {
    entity: &'a Entity,
    fields: &'a Map<String, Value>,
    path: String,
}

/// Normalize `data` whose root has the given shape
///
/// `result` holds the root id (or the list of root ids for `Shape::Many`),
/// with the JSON type it had in the input.
pub fn normalize(
    data: &Value,
    schema: &Schema,
    root: &Shape,
) -> Result<Normalized, NormalizeError> {
    let mut normalized = Normalized::default();
    let mut stack = Vec::new();

    if matches!(root, Shape::One(_)) && !data.is_object() {
        return Err(NormalizeError::NotAnObject {
            entity: root.entity().to_string(),
            path: "$".to_string(),
        });
    }
    normalized.result = reference(data, root, schema, "$".to_string(), &mut stack)?;

    while let Some(visit) = stack.pop() {
        let mut children = Vec::new();
        let mut record = Map::with_capacity(visit.fields.len());

        for (field, value) in visit.fields {
            let flattened = match visit.entity.relation_of(field) {
                Some(shape) => reference(
                    value,
                    shape,
                    schema,
                    format!("{}.{}", visit.path, field),
                    &mut children,
                )?,
                None => value.clone(),
            };
            record.insert(field.clone(), flattened);
        }

        let id = id_key(visit.fields, visit.entity, &visit.path)?;
        normalized.merge(visit.entity.key(), id, record);

        // keep document order: first child is visited next
        stack.extend(children.into_iter().rev());
    }

    log::debug!("Normalized {} entity types", normalized.entities.len());
    Ok(normalized)
}

/// Replace a value of the given shape by its id(s), queueing the entities found
///
/// `null` and values that are not entity objects (e.g. ids already) are kept.
fn reference<'a>(
    value: &'a Value,
    shape: &Shape,
    schema: &'a Schema,
    path: String,
    queue: &mut Vec<Visit<'a>>,
) -> Result<Value, NormalizeError> {
    let entity = lookup(schema, shape.entity(), &path)?;

    match (shape, value) {
        (Shape::One(_), Value::Object(fields)) => {
            let id = id_value(fields, entity, &path)?;
            queue.push(Visit {
                entity,
                fields,
                path,
            });
            Ok(id)
        }
        (Shape::One(_), other) => Ok(other.clone()),
        (Shape::Many(_), Value::Array(items)) => {
            let mut ids = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                match item {
                    Value::Object(fields) => {
                        ids.push(id_value(fields, entity, &item_path)?);
                        queue.push(Visit {
                            entity,
                            fields,
                            path: item_path,
                        });
                    }
                    other => ids.push(other.clone()),
                }
            }
            Ok(Value::Array(ids))
        }
        (Shape::Many(_), Value::Null) => Ok(Value::Null),
        (Shape::Many(_), _) => Err(NormalizeError::NotAnArray {
            entity: entity.key().to_string(),
            path,
        }),
    }
}

fn lookup<'a>(schema: &'a Schema, key: &str, path: &str) -> Result<&'a Entity, NormalizeError> {
    schema.get(key).ok_or_else(|| NormalizeError::UnknownEntity {
        entity: key.to_string(),
        path: path.to_string(),
    })
}

/// The id as it appears in the input
fn id_value(
    fields: &Map<String, Value>,
    entity: &Entity,
    path: &str,
) -> Result<Value, NormalizeError> {
    match fields.get(entity.id_field()) {
        Some(id @ (Value::String(_) | Value::Number(_))) => Ok(id.clone()),
        _ => Err(NormalizeError::MissingId {
            entity: entity.key().to_string(),
            attribute: entity.id_field().to_string(),
            path: path.to_string(),
        }),
    }
}

/// The id as table key
fn id_key(
    fields: &Map<String, Value>,
    entity: &Entity,
    path: &str,
) -> Result<String, NormalizeError> {
    Ok(match id_value(fields, entity, path)? {
        Value::String(id) => id,
        other => other.to_string(),
    })
}
