//! Blog post example data
//!
//! A nested article (author, comments, commenters) used by the normalization
//! part of the walkthrough, and the schema describing it.

use anyhow::{Context, Result};
use flux_normalize::{denormalize, Entity, Normalized, Schema, Shape};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;

pub const ARTICLES: &str = "articles";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commenter {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub commenter: Commenter,
    #[serde(default)]
    pub content: String,
}

/// A fully expanded article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub author: Author,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// The built-in blog post
pub fn sample() -> Value {
    json!({
        "id": "123",
        "author": {
            "id": "1",
            "name": "James"
        },
        "title": "My awesome blog post",
        "content": "This is the content for blog post 123. Lorem ipsum dolor sit amet",
        "comments": [
            {
                "id": "324",
                "commenter": {
                    "id": "2",
                    "name": "Nicole"
                },
                "content": "Comment 324. This is the content for comment 324"
            },
            {
                "id": "325",
                "commenter": {
                    "id": "3",
                    "name": "Ricky"
                },
                "content": "Comment 325. This is the content for comment 325"
            }
        ]
    })
}

/// Load a blog post from a JSON file
pub fn load(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read blog post {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse blog post {}", path.display()))
}

/// Users, comments (with a commenter) and articles (with an author and comments)
pub fn schema() -> Schema {
    Schema::new()
        .entity(Entity::new("users"))
        .entity(Entity::new("comments").one("commenter", "users"))
        .entity(
            Entity::new(ARTICLES)
                .one("author", "users")
                .many("comments", "comments"),
        )
}

/// Rebuild the root article from normalized tables
pub fn article(normalized: &Normalized) -> Result<Article> {
    let expanded = denormalize(
        &normalized.result,
        &Shape::one(ARTICLES),
        &normalized.entities,
        &schema(),
    )?;
    serde_json::from_value(expanded).context("Normalized data does not describe an article")
}
