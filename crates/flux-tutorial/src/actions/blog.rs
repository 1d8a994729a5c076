//! Blog post actions
//!
//! Each part of the post (author, title, content, comments) lives in its own
//! slice and is set through its own action.

use crate::blog_post::{Author, Comment};
use flux_store::Action;
use serde::Deserialize;
use serde_json::json;

pub const SET_AUTHOR_NAME: &str = "SET_AUTHOR_NAME";
pub const SET_TITLE: &str = "SET_TITLE";
pub const SET_CONTENT: &str = "SET_CONTENT";
pub const SET_COMMENT: &str = "SET_COMMENT";

/// Actions for the blog post slices
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogAction {
    SetAuthorName { author: Author },
    SetTitle { title: String },
    SetContent { content: String },
    SetComment { comment: Comment },
}

pub fn set_author_name(author: &Author) -> Action {
    Action::new(SET_AUTHOR_NAME).with(
        "author",
        json!({
            "id": author.id,
            "name": author.name,
        }),
    )
}

pub fn set_title(title: impl Into<String>) -> Action {
    Action::new(SET_TITLE).with("title", title.into())
}

pub fn set_content(content: impl Into<String>) -> Action {
    Action::new(SET_CONTENT).with("content", content.into())
}

pub fn set_comment(comment: &Comment) -> Action {
    Action::new(SET_COMMENT).with(
        "comment",
        json!({
            "id": comment.id,
            "commenter": {
                "id": comment.commenter.id,
                "name": comment.commenter.name,
            },
            "content": comment.content,
        }),
    )
}
