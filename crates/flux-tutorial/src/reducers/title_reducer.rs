use super::assoc;
use crate::actions::BlogAction;
use flux_store::{slice_reducer, Action, Slice, SliceReducer};
use serde_json::json;
use std::rc::Rc;

/// Reducer for the `title` slice, starting as `{}`
pub fn title_reducer() -> impl SliceReducer {
    slice_reducer("titleReducer", json!({}), reduce)
}

fn reduce(state: &Slice, action: &Action) -> Slice {
    match action.decode::<BlogAction>() {
        Some(BlogAction::SetTitle { title }) => assoc(state, "title", title.into()),
        _ => Rc::clone(state),
    }
}
