//! Flux Store
//!
//! A minimal unidirectional state container:
//! - [`Action`]s describe an intent to change state
//! - Pure reducers compute the next state of one slice from the current one
//! - [`CombinedReducer`] fans an action out to every named slice reducer
//! - [`Store`] owns the current state, applies actions via `dispatch` and
//!   notifies subscribers
//!
//! # Example
//!
//! ```
//! use flux_store::{combine_reducers, slice_reducer, Action, Store};
//! use serde_json::json;
//! use std::rc::Rc;
//!
//! let items = slice_reducer("itemsReducer", json!([]), |state, action| {
//!     match (action.action_type(), action.get("item")) {
//!         (Some("ADD_ITEM"), Some(item)) => {
//!             let mut items = state.as_array().cloned().unwrap_or_default();
//!             items.push(item.clone());
//!             Rc::new(json!(items))
//!         }
//!         _ => Rc::clone(state),
//!     }
//! });
//!
//! let store = Store::create(combine_reducers!(items: items), None)?;
//! store.dispatch(Action::new("ADD_ITEM").with("item", "milk"))?;
//!
//! assert_eq!(store.get_state().slice("items"), Some(&json!(["milk"])));
//! # Ok::<(), flux_store::StoreError>(())
//! ```

mod action;
mod combine;
mod error;
mod reducer;
mod store;

pub use action::{Action, INIT_ACTION_TYPE, RESERVED_PREFIX};
pub use combine::{combine_reducers, CombinedReducer, CombinedState};
pub use error::StoreError;
pub use reducer::{root_reducer, slice_reducer, Reducer, RootFn, Slice, SliceReducer, WithDefault};
pub use store::{Store, Unsubscribe};

/// Build a [`CombinedReducer`] from `name: reducer` pairs
///
/// Slice names become the keys of the combined state, in the order given.
///
/// ```
/// # use flux_store::{combine_reducers, slice_reducer};
/// # use serde_json::json;
/// # use std::rc::Rc;
/// let reducer = combine_reducers!(
///     user: slice_reducer("user", json!({}), |state, _| Rc::clone(state)),
///     items: slice_reducer("items", json!([]), |state, _| Rc::clone(state)),
/// );
/// assert_eq!(reducer.keys().collect::<Vec<_>>(), ["user", "items"]);
/// ```
#[macro_export]
macro_rules! combine_reducers {
    ($($name:ident : $reducer:expr),* $(,)?) => {
        $crate::CombinedReducer::new()$(.slice(stringify!($name), $reducer))*
    };
}
