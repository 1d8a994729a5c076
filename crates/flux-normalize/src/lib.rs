//! Entity normalization
//!
//! Flattens a nested JSON object graph into one table per entity type, keyed
//! by id, with nested entities replaced by their ids. A [`Schema`] declares the
//! entity types, their id attribute and their relationship fields.
//!
//! # Example
//!
//! ```
//! use flux_normalize::{normalize, Entity, Schema, Shape};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .entity(Entity::new("users"))
//!     .entity(Entity::new("articles").one("author", "users"));
//!
//! let data = json!({"id": "123", "author": {"id": "1", "name": "James"}});
//! let normalized = normalize(&data, &schema, &Shape::one("articles"))?;
//!
//! assert_eq!(normalized.result, json!("123"));
//! assert_eq!(normalized.entity("articles", "123"), Some(&json!({"id": "123", "author": "1"})));
//! assert_eq!(normalized.entity("users", "1"), Some(&json!({"id": "1", "name": "James"})));
//! # Ok::<(), flux_normalize::NormalizeError>(())
//! ```

mod denormalize;
mod normalize;
mod schema;
mod types;

pub use denormalize::denormalize;
pub use normalize::{normalize, NormalizeError};
pub use schema::{Entity, Schema, Shape};
pub use types::{Entities, Normalized};
