use super::assoc;
use crate::actions::UserAction;
use flux_store::{slice_reducer, Action, Slice, SliceReducer};
use serde_json::json;
use std::rc::Rc;

/// Reducer for the `user` slice, starting as `{}`
pub fn user_reducer() -> impl SliceReducer {
    slice_reducer("userReducer", json!({}), reduce)
}

fn reduce(state: &Slice, action: &Action) -> Slice {
    match action.decode::<UserAction>() {
        Some(UserAction::SetName { name }) => assoc(state, "name", name),
        None => Rc::clone(state),
    }
}
