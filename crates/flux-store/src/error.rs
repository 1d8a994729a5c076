use thiserror::Error;

/// Errors surfaced by `Store::create` and `Store::dispatch`
///
/// Everything except `ReservedActionType` is a contract violation: a defect in
/// how reducers or listeners are written, never a recoverable condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(
        "reducer for slice \"{slice}\" returned no state for action \"{action_type}\"; \
         return the previous state for actions the reducer does not handle"
    )]
    UndefinedSlice { slice: String, action_type: String },

    #[error("root reducer returned no state for action \"{action_type}\"")]
    UndefinedState { action_type: String },

    #[error(
        "cannot dispatch \"{action_type}\" while another dispatch is in progress; \
         reducers and listeners must not dispatch"
    )]
    ReentrantDispatch { action_type: String },

    #[error("action type \"{0}\" uses the \"@@\" prefix reserved for the store")]
    ReservedActionType(String),
}

impl StoreError {
    /// Whether the error indicates a broken reducer/listener contract
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, StoreError::ReservedActionType(_))
    }
}
