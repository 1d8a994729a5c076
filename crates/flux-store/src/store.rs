use crate::action::Action;
use crate::error::StoreError;
use crate::reducer::Reducer;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Store - holds application state and runs the dispatch loop
///
/// The Store follows the Redux pattern:
/// - One current state, replaced (never mutated) on every dispatch
/// - A root reducer computes the next state from the current one + action
/// - Subscribers are notified after every completed dispatch
///
/// The store is single threaded. Dispatch takes `&self` so listeners and
/// reducers can hold a handle to the store; a nested dispatch is rejected with
/// [`StoreError::ReentrantDispatch`].
pub struct Store<S, R> {
    reducer: R,
    state: RefCell<Rc<S>>,
    listeners: Rc<RefCell<Listeners>>,
    dispatching: Cell<bool>,
    /// Type of a nested dispatch attempted while reducing
    rejected: RefCell<Option<String>>,
}

impl<S, R: Reducer<S>> Store<S, R> {
    /// Create a store and run every reducer's default-state logic once
    ///
    /// The root reducer receives `initial_state` and the private `@@INIT`
    /// action.
    pub fn create(reducer: R, initial_state: Option<S>) -> Result<Self, StoreError> {
        let state = reducer.reduce(initial_state.as_ref(), &Action::init())?;
        log::debug!("Store initialized");

        Ok(Self {
            reducer,
            state: RefCell::new(Rc::new(state)),
            listeners: Rc::new(RefCell::new(Listeners::default())),
            dispatching: Cell::new(false),
            rejected: RefCell::new(None),
        })
    }

    /// Current state snapshot
    pub fn get_state(&self) -> Rc<S> {
        Rc::clone(&self.state.borrow())
    }

    /// Apply an action, notify subscribers and hand the action back
    ///
    /// Listeners are taken as a snapshot when the dispatch starts: listeners
    /// subscribed meanwhile wait for the next dispatch, unsubscribed ones
    /// still run this time.
    ///
    /// A reducer that dispatches makes the outer dispatch fail as well and the
    /// state is not replaced. A listener that dispatches only gets the error
    /// for its own call, the outer state change already happened.
    pub fn dispatch(&self, action: Action) -> Result<Action, StoreError> {
        let Some(_guard) = DispatchGuard::enter(&self.dispatching) else {
            log::error!("Rejected nested dispatch of {}", action);
            self.rejected.replace(Some(action.label().to_string()));
            return Err(StoreError::ReentrantDispatch {
                action_type: action.label().to_string(),
            });
        };

        if action.is_reserved() {
            return Err(StoreError::ReservedActionType(action.label().to_string()));
        }

        log::trace!("Dispatching {}", action);
        let listeners = self.listener_snapshot();
        let current = self.get_state();

        self.rejected.replace(None);
        let next = self.reducer.reduce(Some(&current), &action)?;
        if let Some(nested) = self.rejected.take() {
            return Err(StoreError::ReentrantDispatch {
                action_type: nested,
            });
        }

        self.state.replace(Rc::new(next));
        log::debug!("State replaced after {}", action.label());

        for listener in listeners {
            listener();
        }
        self.rejected.replace(None);

        Ok(action)
    }

    /// Register a listener called after every completed dispatch
    pub fn subscribe<F: Fn() + 'static>(&self, listener: F) -> Unsubscribe {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));

        Unsubscribe {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    fn listener_snapshot(&self) -> Vec<Listener> {
        self.listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

/// Handle returned by [`Store::subscribe`]
///
/// Dropping the handle keeps the listener registered.
pub struct Unsubscribe {
    listeners: Weak<RefCell<Listeners>>,
    id: u64,
}

impl Unsubscribe {
    /// Remove the listener; returns whether it was still registered
    pub fn unsubscribe(&self) -> bool {
        let Some(listeners) = self.listeners.upgrade() else {
            return false;
        };
        let mut listeners = listeners.borrow_mut();
        let before = listeners.entries.len();
        listeners.entries.retain(|(id, _)| *id != self.id);
        listeners.entries.len() < before
    }
}

/// Marks a dispatch in progress, cleared on drop (also when unwinding)
struct DispatchGuard<'a>(&'a Cell<bool>);

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
