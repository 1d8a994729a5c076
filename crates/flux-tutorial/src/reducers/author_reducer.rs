use super::assoc;
use crate::actions::BlogAction;
use flux_store::{slice_reducer, Action, Slice, SliceReducer};
use serde_json::json;
use std::rc::Rc;

/// Reducer for the `author` slice, starting as `{}`
pub fn author_reducer() -> impl SliceReducer {
    slice_reducer("authorReducer", json!({}), reduce)
}

fn reduce(state: &Slice, action: &Action) -> Slice {
    match action.decode::<BlogAction>() {
        Some(BlogAction::SetAuthorName { author }) => {
            let state = assoc(state, "id", author.id.into());
            assoc(&state, "name", author.name.into())
        }
        _ => Rc::clone(state),
    }
}
