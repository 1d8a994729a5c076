//! Reducer composition
//!
//! [`CombinedReducer`] turns a set of named slice reducers into one root
//! reducer. Every dispatch runs every slice reducer exactly once, each with its
//! own slice, and assembles the results into a new [`CombinedState`].

use crate::action::Action;
use crate::error::StoreError;
use crate::reducer::{Reducer, Slice, SliceReducer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;

/// State tree made of named slices, in reducer order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedState {
    slices: Vec<(String, Slice)>,
}

impl CombinedState {
    /// Build a preloaded state from a JSON object
    ///
    /// Returns `None` for anything but an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::from(fields)),
            _ => None,
        }
    }

    /// Get a slice by name
    pub fn get(&self, key: &str) -> Option<&Slice> {
        self.slices
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, slice)| slice)
    }

    /// Get the value of a slice by name
    pub fn slice(&self, key: &str) -> Option<&Value> {
        self.get(key).map(|slice| slice.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slice)> {
        self.slices.iter().map(|(name, slice)| (name.as_str(), slice))
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Whether both states hold the very same slice references under the same keys
    pub fn same_slices(&self, other: &CombinedState) -> bool {
        self.slices.len() == other.slices.len()
            && self
                .slices
                .iter()
                .zip(&other.slices)
                .all(|((a_name, a), (b_name, b))| a_name == b_name && Rc::ptr_eq(a, b))
    }

    /// The whole tree as one JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.slices
                .iter()
                .map(|(name, slice)| (name.clone(), slice.as_ref().clone()))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for CombinedState {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            slices: fields
                .into_iter()
                .map(|(name, value)| (name, Rc::new(value)))
                .collect(),
        }
    }
}

impl Serialize for CombinedState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slices.len()))?;
        for (name, slice) in &self.slices {
            map.serialize_entry(name, slice.as_ref())?;
        }
        map.end()
    }
}

impl fmt::Display for CombinedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Root reducer composed of named slice reducers
#[derive(Default)]
pub struct CombinedReducer {
    reducers: Vec<(String, Box<dyn SliceReducer>)>,
}

impl CombinedReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slice reducer
    ///
    /// Reusing a name replaces the earlier reducer but keeps its position.
    pub fn slice<R: SliceReducer + 'static>(mut self, name: impl Into<String>, reducer: R) -> Self {
        self.insert(name.into(), Box::new(reducer));
        self
    }

    fn insert(&mut self, name: String, reducer: Box<dyn SliceReducer>) {
        match self.reducers.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => {
                log::warn!("Replacing reducer for slice \"{}\"", name);
                entry.1 = reducer;
            }
            None => self.reducers.push((name, reducer)),
        }
    }

    /// Slice names, in the order reducers were added
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.reducers.iter().map(|(name, _)| name.as_str())
    }

    fn owns(&self, key: &str) -> bool {
        self.reducers.iter().any(|(name, _)| name == key)
    }
}

impl fmt::Debug for CombinedReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("slices", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Reducer<CombinedState> for CombinedReducer {
    fn reduce(
        &self,
        state: Option<&CombinedState>,
        action: &Action,
    ) -> Result<CombinedState, StoreError> {
        if let Some(state) = state {
            for key in state.keys().filter(|key| !self.owns(key)) {
                log::warn!("Dropping slice \"{}\": no reducer owns it", key);
            }
        }

        let mut slices = Vec::with_capacity(self.reducers.len());
        for (key, reducer) in &self.reducers {
            let previous = state.and_then(|state| state.get(key));
            let next = reducer
                .reduce(previous, action)
                .ok_or_else(|| StoreError::UndefinedSlice {
                    slice: key.clone(),
                    action_type: action.label().to_string(),
                })?;
            slices.push((key.clone(), next));
        }

        Ok(CombinedState { slices })
    }
}

/// Combine named slice reducers into one root reducer
///
/// See also the [`combine_reducers!`](crate::combine_reducers!) macro.
pub fn combine_reducers<I, K>(reducers: I) -> CombinedReducer
where
    I: IntoIterator<Item = (K, Box<dyn SliceReducer>)>,
    K: Into<String>,
{
    let mut combined = CombinedReducer::new();
    for (name, reducer) in reducers {
        combined.insert(name.into(), reducer);
    }
    combined
}
