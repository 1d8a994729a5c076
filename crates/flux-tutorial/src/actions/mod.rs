//! Actions module
//!
//! Every domain has a typed action enum, tagged by `type` so it maps onto the
//! flat `{"type": ..., ...payload}` record, and plain action creators that
//! build the `Action` to dispatch. Reducers decode the record back into their
//! enum; anything that doesn't decode is not theirs.

pub mod blog;
pub mod entities;
pub mod items;
pub mod user;

pub use blog::{set_author_name, set_comment, set_content, set_title, BlogAction};
pub use entities::{load_entities, EntitiesAction};
pub use items::{add_item, ItemsAction};
pub use user::{set_name, UserAction};

use flux_store::Action;

/// An action no reducer cares about
pub fn an_action() -> Action {
    Action::new("AN_ACTION")
}
