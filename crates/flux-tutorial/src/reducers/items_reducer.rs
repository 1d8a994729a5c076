use super::append;
use crate::actions::ItemsAction;
use flux_store::{slice_reducer, Action, Slice, SliceReducer};
use serde_json::json;
use std::rc::Rc;

/// Reducer for the `items` slice, starting as `[]`
pub fn items_reducer() -> impl SliceReducer {
    slice_reducer("itemsReducer", json!([]), reduce)
}

fn reduce(state: &Slice, action: &Action) -> Slice {
    match action.decode::<ItemsAction>() {
        Some(ItemsAction::AddItem { item }) => append(state, item),
        None => Rc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{add_item, set_name};

    #[test]
    fn test_items_reducer_appends_in_order() {
        let reducer = items_reducer();
        let state = reducer.reduce(None, &add_item("milk")).unwrap();
        let state = reducer.reduce(Some(&state), &add_item("eggs")).unwrap();
        assert_eq!(*state, json!(["milk", "eggs"]));
    }

    #[test]
    fn test_items_reducer_appends_any_value() {
        let reducer = items_reducer();
        let state: Slice = Rc::new(json!([]));
        let state = reducer.reduce(Some(&state), &add_item(42)).unwrap();
        let state = reducer
            .reduce(Some(&state), &add_item(json!({"name": "eggs"})))
            .unwrap();
        let state = reducer
            .reduce(Some(&state), &Action::new("ADD_ITEM"))
            .unwrap();
        assert_eq!(*state, json!([42, {"name": "eggs"}, null]));
    }

    #[test]
    fn test_items_reducer_ignores_other_actions() {
        let state: Slice = Rc::new(json!(["milk"]));
        let next = items_reducer().reduce(Some(&state), &set_name("bob")).unwrap();
        assert!(Rc::ptr_eq(&state, &next));
    }
}
