//! Items actions

use flux_store::Action;
use serde::Deserialize;
use serde_json::Value;

pub const ADD_ITEM: &str = "ADD_ITEM";

/// Actions for the `items` slice
///
/// Items can be any JSON value; a missing item is added as `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemsAction {
    AddItem {
        #[serde(default)]
        item: Value,
    },
}

pub fn add_item(item: impl Into<Value>) -> Action {
    Action::new(ADD_ITEM).with("item", item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_item_creator() {
        assert_eq!(
            add_item("milk").decode::<ItemsAction>(),
            Some(ItemsAction::AddItem {
                item: json!("milk")
            })
        );
    }

    #[test]
    fn test_add_item_accepts_any_value() {
        assert_eq!(
            add_item(json!({"name": "milk", "count": 2})).decode::<ItemsAction>(),
            Some(ItemsAction::AddItem {
                item: json!({"name": "milk", "count": 2})
            })
        );
        assert_eq!(
            Action::new(ADD_ITEM).decode::<ItemsAction>(),
            Some(ItemsAction::AddItem { item: Value::Null })
        );
    }
}
