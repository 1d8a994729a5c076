//! Entity table actions

use flux_normalize::{Entities, Normalized};
use flux_store::Action;
use serde::Deserialize;

pub const LOAD_ENTITIES: &str = "LOAD_ENTITIES";

/// Actions for the `entities` slice
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntitiesAction {
    LoadEntities { entities: Entities },
}

/// Load normalized entity tables into the store
pub fn load_entities(normalized: &Normalized) -> Action {
    Action::new(LOAD_ENTITIES).with("entities", normalized.entities_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_entities_creator() {
        let mut normalized = Normalized::default();
        normalized
            .entities
            .entry("users".to_string())
            .or_default()
            .insert("1".to_string(), json!({"id": "1"}));

        let action = load_entities(&normalized);
        let Some(EntitiesAction::LoadEntities { entities }) = action.decode::<EntitiesAction>() else {
            panic!("LOAD_ENTITIES should decode");
        };
        assert_eq!(entities, normalized.entities);
    }
}
