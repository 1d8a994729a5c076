//! Actions
//!
//! An action is a flat record: a `type` discriminator plus free-form payload
//! fields, e.g. `{"type": "SET_NAME", "name": "bob"}`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Prefix reserved for actions dispatched by the store itself
pub const RESERVED_PREFIX: &str = "@@";

/// Type of the bootstrap action dispatched once by `Store::create`
pub const INIT_ACTION_TYPE: &str = "@@INIT";

/// An intent to change state
///
/// The `type` is optional on purpose: an action without one is accepted by the
/// store and simply matches no reducer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Action {
    /// Create an action of the given type with an empty payload
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            payload: Map::new(),
        }
    }

    /// Create an action that carries no `type`
    pub fn untyped() -> Self {
        Self::default()
    }

    /// The bootstrap action
    pub(crate) fn init() -> Self {
        Self::new(INIT_ACTION_TYPE)
    }

    /// Parse an action from its JSON record
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Add a payload field
    ///
    /// A `type` field sets the action type instead; a `type` that is not a
    /// string leaves the action untyped. The payload never holds `type`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key == "type" {
            self.kind = match value.into() {
                Value::String(kind) => Some(kind),
                other => {
                    log::warn!("Ignoring non-string action type {}", other);
                    None
                }
            };
        } else {
            self.payload.insert(key, value.into());
        }
        self
    }

    /// The action type, if any
    pub fn action_type(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Check the action type
    pub fn is(&self, kind: &str) -> bool {
        self.action_type() == Some(kind)
    }

    /// Whether the type uses the prefix reserved for the store
    pub fn is_reserved(&self) -> bool {
        self.action_type()
            .map(|kind| kind.starts_with(RESERVED_PREFIX))
            .unwrap_or(false)
    }

    /// Type used in log and error messages
    pub fn label(&self) -> &str {
        self.action_type().unwrap_or("<untyped>")
    }

    /// Get a payload field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Get a payload field as a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// All payload fields
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Decode into a typed action enum
    ///
    /// Meant for enums tagged with `#[serde(tag = "type")]`. Returns `None`
    /// when the type is not one of the enum's variants or the payload does not
    /// fit the variant, so reducers can treat both as "not mine".
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        let value = serde_json::to_value(self).ok()?;
        serde_json::from_value(value).ok()
    }

    /// The action as its flat JSON record
    pub fn to_value(&self) -> Value {
        let mut record = Map::with_capacity(self.payload.len() + 1);
        if let Some(kind) = &self.kind {
            record.insert("type".to_string(), Value::String(kind.clone()));
        }
        for (key, value) in &self.payload {
            record.insert(key.clone(), value.clone());
        }
        Value::Object(record)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
    enum UserAction {
        SetName { name: String },
    }

    #[test]
    fn test_action_serializes_flat() {
        let action = Action::new("SET_NAME").with("name", "bob");
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "SET_NAME", "name": "bob"})
        );
        assert_eq!(action.to_value(), json!({"type": "SET_NAME", "name": "bob"}));
        assert_eq!(action.to_string(), r#"{"type":"SET_NAME","name":"bob"}"#);
    }

    #[test]
    fn test_action_from_value() {
        let action = Action::from_value(json!({"type": "ADD_ITEM", "item": "milk"})).unwrap();
        assert!(action.is("ADD_ITEM"));
        assert_eq!(action.get_str("item"), Some("milk"));
        assert_eq!(action.payload().len(), 1);
    }

    #[test]
    fn test_missing_type_is_accepted() {
        let action = Action::from_value(json!({"item": "milk"})).unwrap();
        assert_eq!(action.action_type(), None);
        assert_eq!(action.label(), "<untyped>");
        assert!(!action.is_reserved());
        assert_eq!(Action::untyped().to_string(), "{}");
    }

    #[test]
    fn test_reserved_prefix() {
        assert!(Action::init().is_reserved());
        assert!(Action::new("@@SOMETHING").is_reserved());
        assert!(!Action::new("SET_NAME").is_reserved());
    }

    #[test]
    fn test_decode_typed_action() {
        let action = Action::new("SET_NAME").with("name", "bob");
        assert_eq!(
            action.decode::<UserAction>(),
            Some(UserAction::SetName {
                name: "bob".to_string()
            })
        );
    }

    #[test]
    fn test_type_field_sets_the_action_type() {
        let action = Action::new("HARMLESS")
            .with("type", "ADD_ITEM")
            .with("item", "milk");
        assert_eq!(action.action_type(), Some("ADD_ITEM"));
        assert!(!action.payload().contains_key("type"));
        assert_eq!(action.to_value(), json!({"type": "ADD_ITEM", "item": "milk"}));

        let action = Action::new("HARMLESS").with("type", "@@INIT");
        assert!(action.is_reserved());

        let action = Action::new("HARMLESS").with("type", 42);
        assert_eq!(action.action_type(), None);
        assert_eq!(action.to_value(), json!({}));
    }

    #[test]
    fn test_parsed_payload_never_holds_type() {
        let action = Action::from_value(json!({"type": "SET_NAME", "name": "bob"})).unwrap();
        assert_eq!(action.payload().get("type"), None);
        assert_eq!(
            serde_json::to_string(&action).unwrap(),
            r#"{"type":"SET_NAME","name":"bob"}"#
        );
    }

    #[test]
    fn test_decode_unknown_or_malformed_is_none() {
        assert_eq!(Action::new("ADD_ITEM").with("item", "milk").decode::<UserAction>(), None);
        assert_eq!(Action::new("SET_NAME").decode::<UserAction>(), None);
        assert_eq!(Action::untyped().decode::<UserAction>(), None);
    }
}
