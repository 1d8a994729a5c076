use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Entity tables: entity type -> id -> flattened record
pub type Entities = BTreeMap<String, BTreeMap<String, Value>>;

/// Output of `normalize`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    /// Root id, or list of root ids
    pub result: Value,
    pub entities: Entities,
}

impl Normalized {
    /// Look up one flattened record
    pub fn entity(&self, entity: &str, id: &str) -> Option<&Value> {
        self.entities.get(entity).and_then(|table| table.get(id))
    }

    /// Entity tables as one JSON object
    pub fn entities_value(&self) -> Value {
        Value::Object(
            self.entities
                .iter()
                .map(|(entity, table)| {
                    let table: Map<String, Value> = table
                        .iter()
                        .map(|(id, record)| (id.clone(), record.clone()))
                        .collect();
                    (entity.clone(), Value::Object(table))
                })
                .collect(),
        )
    }

    /// Merge a record into its table; fields of `record` win over existing ones
    pub(crate) fn merge(&mut self, entity: &str, id: String, record: Map<String, Value>) {
        let table = self.entities.entry(entity.to_string()).or_default();
        match table.get_mut(&id) {
            Some(Value::Object(existing)) => {
                log::trace!("Merging duplicate {} entity {}", entity, id);
                existing.extend(record);
            }
            _ => {
                table.insert(id, Value::Object(record));
            }
        }
    }
}
