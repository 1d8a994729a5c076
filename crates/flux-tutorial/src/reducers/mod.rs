//! Slice reducers
//!
//! Every reducer decodes the action into its domain enum and falls back to
//! returning the state it was given for anything else.

pub mod author_reducer;
pub mod comments_reducer;
pub mod content_reducer;
pub mod entities_reducer;
pub mod items_reducer;
pub mod title_reducer;
pub mod user_reducer;

use flux_store::Slice;
use serde_json::Value;
use std::rc::Rc;

/// Copy of an object slice with one field set
///
/// A slice that isn't an object is replaced by a fresh one.
pub fn assoc(state: &Slice, key: &str, value: Value) -> Slice {
    let mut fields = state.as_object().cloned().unwrap_or_default();
    fields.insert(key.to_string(), value);
    Rc::new(Value::Object(fields))
}

/// Copy of an array slice with one more item at the end
pub fn append(state: &Slice, item: Value) -> Slice {
    let mut items = state.as_array().cloned().unwrap_or_default();
    items.push(item);
    Rc::new(Value::Array(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assoc_copies_and_keeps_other_fields() {
        let state: Slice = Rc::new(json!({"id": "1"}));
        let next = assoc(&state, "name", json!("James"));
        assert_eq!(*next, json!({"id": "1", "name": "James"}));
        assert_eq!(*state, json!({"id": "1"}));
    }

    #[test]
    fn test_append_copies() {
        let state: Slice = Rc::new(json!(["milk"]));
        let next = append(&state, json!("eggs"));
        assert_eq!(*next, json!(["milk", "eggs"]));
        assert_eq!(*state, json!(["milk"]));
    }
}
