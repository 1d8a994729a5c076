//! Reducer contracts
//!
//! Slice reducers work on one [`Slice`] of the state tree. They receive `None`
//! on their first call and must answer with their default; for actions they
//! don't handle they must hand back the very same `Rc` they were given.
//!
//! Root reducers ([`Reducer`]) own the whole state and are what a `Store` runs.

use crate::action::Action;
use crate::error::StoreError;
use serde_json::Value;
use std::rc::Rc;

/// One slice of the state tree, shared and immutable
///
/// "Unchanged" means `Rc::ptr_eq` with the previous slice.
pub type Slice = Rc<Value>;

/// Reducer for a single named slice
///
/// Returning `None` means "no state" and is rejected by the composer.
pub trait SliceReducer {
    fn reduce(&self, state: Option<&Slice>, action: &Action) -> Option<Slice>;
}

impl<F> SliceReducer for F
where
    F: Fn(Option<&Slice>, &Action) -> Option<Slice>,
{
    fn reduce(&self, state: Option<&Slice>, action: &Action) -> Option<Slice> {
        self(state, action)
    }
}

/// Root reducer over a whole state tree
pub trait Reducer<S> {
    fn reduce(&self, state: Option<&S>, action: &Action) -> Result<S, StoreError>;
}

/// Slice reducer with a static default state
///
/// Created via [`slice_reducer`].
pub struct WithDefault<F> {
    name: String,
    default: Value,
    reduce: F,
}

/// Wrap a total reducer function and its default state
///
/// `name` only shows up in the debug log line written on every call.
pub fn slice_reducer<F>(name: impl Into<String>, default: Value, reduce: F) -> WithDefault<F>
where
    F: Fn(&Slice, &Action) -> Slice,
{
    WithDefault {
        name: name.into(),
        default,
        reduce,
    }
}

impl<F> WithDefault<F> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_state(&self) -> &Value {
        &self.default
    }
}

impl<F> SliceReducer for WithDefault<F>
where
    F: Fn(&Slice, &Action) -> Slice,
{
    fn reduce(&self, state: Option<&Slice>, action: &Action) -> Option<Slice> {
        let state = match state {
            Some(state) => Rc::clone(state),
            None => Rc::new(self.default.clone()),
        };
        log::debug!(
            "{} was called with state {} and action {}",
            self.name,
            state,
            action
        );
        Some((self.reduce)(&state, action))
    }
}

/// Root reducer backed by a plain function
///
/// Created via [`root_reducer`]. A `None` result is reported as
/// [`StoreError::UndefinedState`].
pub struct RootFn<F> {
    reduce: F,
}

/// Use a plain function as the root reducer of a store
pub fn root_reducer<S, F>(reduce: F) -> RootFn<F>
where
    F: Fn(Option<&S>, &Action) -> Option<S>,
{
    RootFn { reduce }
}

impl<S, F> Reducer<S> for RootFn<F>
where
    F: Fn(Option<&S>, &Action) -> Option<S>,
{
    fn reduce(&self, state: Option<&S>, action: &Action) -> Result<S, StoreError> {
        (self.reduce)(state, action).ok_or_else(|| StoreError::UndefinedState {
            action_type: action.label().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user_reducer() -> impl SliceReducer {
        slice_reducer("userReducer", json!({}), |state, action| {
            match (action.action_type(), action.get("name")) {
                (Some("SET_NAME"), Some(name)) => {
                    let mut user = state.as_object().cloned().unwrap_or_default();
                    user.insert("name".to_string(), name.clone());
                    Rc::new(Value::Object(user))
                }
                _ => Rc::clone(state),
            }
        })
    }

    #[test]
    fn test_default_state_on_first_call() {
        let state = user_reducer().reduce(None, &Action::new("__unknown__"));
        assert_eq!(state.as_deref(), Some(&json!({})));
    }

    #[test]
    fn test_unknown_action_returns_same_reference() {
        let reducer = user_reducer();
        let state: Slice = Rc::new(json!({"name": "alice", "age": 30}));
        let next = reducer.reduce(Some(&state), &Action::new("__unknown__")).unwrap();
        assert!(Rc::ptr_eq(&state, &next));

        let next = reducer.reduce(Some(&state), &Action::untyped()).unwrap();
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_handled_action_returns_new_value_and_keeps_fields() {
        let reducer = user_reducer();
        let state: Slice = Rc::new(json!({"age": 30}));
        let next = reducer
            .reduce(Some(&state), &Action::new("SET_NAME").with("name", "bob"))
            .unwrap();

        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(*next, json!({"age": 30, "name": "bob"}));
        // input untouched
        assert_eq!(*state, json!({"age": 30}));
    }

    #[test]
    fn test_closure_slice_reducer() {
        let reducer = |state: Option<&Slice>, _action: &Action| state.cloned();
        assert_eq!(reducer.reduce(None, &Action::new("ANY")), None);

        let state: Slice = Rc::new(json!(1));
        let next = reducer.reduce(Some(&state), &Action::new("ANY")).unwrap();
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_root_fn_reports_undefined_state() {
        let counter = root_reducer(|state: Option<&i64>, action: &Action| {
            match (state, action.action_type()) {
                (_, Some("BREAK")) => None,
                (Some(count), Some("INCREMENT")) => Some(count + 1),
                (Some(count), _) => Some(*count),
                (None, _) => Some(0),
            }
        });

        fn run(
            reducer: &impl Reducer<i64>,
            state: Option<&i64>,
            action: &Action,
        ) -> Result<i64, StoreError> {
            reducer.reduce(state, action)
        }

        assert_eq!(run(&counter, None, &Action::init()), Ok(0));
        assert_eq!(run(&counter, Some(&41), &Action::new("INCREMENT")), Ok(42));
        assert_eq!(
            run(&counter, Some(&1), &Action::new("BREAK")),
            Err(StoreError::UndefinedState {
                action_type: "BREAK".to_string()
            })
        );
    }

    #[test]
    fn test_with_default_accessors() {
        let reducer = slice_reducer("itemsReducer", json!([]), |state, _| Rc::clone(state));
        assert_eq!(reducer.name(), "itemsReducer");
        assert_eq!(reducer.default_state(), &json!([]));
    }
}
