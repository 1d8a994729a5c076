use super::append;
use crate::actions::BlogAction;
use flux_store::{slice_reducer, Action, Slice, SliceReducer};
use serde_json::json;
use std::rc::Rc;

/// Reducer for the `comments` slice, starting as `[]`
///
/// Every `SET_COMMENT` adds one comment at the end.
pub fn comments_reducer() -> impl SliceReducer {
    slice_reducer("commentsReducer", json!([]), reduce)
}

fn reduce(state: &Slice, action: &Action) -> Slice {
    match action.decode::<BlogAction>() {
        Some(BlogAction::SetComment { comment }) => match serde_json::to_value(&comment) {
            Ok(comment) => append(state, comment),
            Err(err) => {
                log::warn!("Dropping comment {}: {}", comment.id, err);
                Rc::clone(state)
            }
        },
        _ => Rc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::set_comment;
    use crate::blog_post::{Comment, Commenter};
    use pretty_assertions::assert_eq;

    fn comment(id: &str, name: &str) -> Comment {
        Comment {
            id: id.to_string(),
            commenter: Commenter {
                id: format!("c{}", id),
                name: name.to_string(),
            },
            content: format!("Comment {}", id),
        }
    }

    #[test]
    fn test_comments_reducer_appends() {
        let reducer = comments_reducer();
        let state = reducer
            .reduce(None, &set_comment(&comment("324", "Nicole")))
            .unwrap();
        let state = reducer
            .reduce(Some(&state), &set_comment(&comment("325", "Ricky")))
            .unwrap();

        assert_eq!(
            *state,
            json!([
                {"id": "324", "commenter": {"id": "c324", "name": "Nicole"}, "content": "Comment 324"},
                {"id": "325", "commenter": {"id": "c325", "name": "Ricky"}, "content": "Comment 325"}
            ])
        );
    }

    #[test]
    fn test_malformed_comment_is_not_ours() {
        let state: Slice = Rc::new(json!([]));
        let action = Action::new("SET_COMMENT").with("comment", "not a comment");
        let next = comments_reducer().reduce(Some(&state), &action).unwrap();
        assert!(Rc::ptr_eq(&state, &next));
    }
}
