use crate::actions::EntitiesAction;
use flux_store::{slice_reducer, Action, Slice, SliceReducer};
use serde_json::{json, Map, Value};
use std::rc::Rc;

/// Reducer for the `entities` slice, starting as `{}`
///
/// Loaded tables are merged by id into the tables already present.
pub fn entities_reducer() -> impl SliceReducer {
    slice_reducer("entitiesReducer", json!({}), reduce)
}

fn reduce(state: &Slice, action: &Action) -> Slice {
    let Some(EntitiesAction::LoadEntities { entities }) = action.decode::<EntitiesAction>() else {
        return Rc::clone(state);
    };

    let mut tables = state.as_object().cloned().unwrap_or_default();
    for (entity, records) in entities {
        let table = tables
            .entry(entity)
            .or_insert_with(|| Value::Object(Map::new()));
        if !table.is_object() {
            *table = Value::Object(Map::new());
        }
        if let Value::Object(table) = table {
            table.extend(records);
        }
    }
    Rc::new(Value::Object(tables))
}
