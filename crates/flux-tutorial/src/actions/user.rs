//! User actions

use flux_store::Action;
use serde::Deserialize;
use serde_json::Value;

pub const SET_NAME: &str = "SET_NAME";

/// Actions for the `user` slice
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    SetName {
        #[serde(default)]
        name: Value,
    },
}

pub fn set_name(name: impl Into<Value>) -> Action {
    Action::new(SET_NAME).with("name", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_name_creator() {
        let action = set_name("bob");
        assert_eq!(action.to_value(), json!({"type": "SET_NAME", "name": "bob"}));
        assert_eq!(
            action.decode::<UserAction>(),
            Some(UserAction::SetName {
                name: json!("bob")
            })
        );
    }

    #[test]
    fn test_set_name_keeps_non_string_names() {
        assert_eq!(
            set_name(json!({"first": "Bob"})).decode::<UserAction>(),
            Some(UserAction::SetName {
                name: json!({"first": "Bob"})
            })
        );
    }
}
