use super::assoc;
use crate::actions::BlogAction;
use flux_store::{slice_reducer, Action, Slice, SliceReducer};
use serde_json::json;
use std::rc::Rc;

/// Reducer for the `content` slice, starting as `{}`
pub fn content_reducer() -> impl SliceReducer {
    slice_reducer("contentReducer", json!({}), reduce)
}

fn reduce(state: &Slice, action: &Action) -> Slice {
    match action.decode::<BlogAction>() {
        Some(BlogAction::SetContent { content }) => assoc(state, "content", content.into()),
        _ => Rc::clone(state),
    }
}
