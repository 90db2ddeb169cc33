//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{State, Transition, TransitionPayload};

/// Builder for constructing transitions with a fluent API.
#[derive(Clone, Debug)]
pub struct TransitionBuilder<S: State> {
    from: Option<S>,
    to: Option<S>,
    payload: TransitionPayload,
}

impl<S: State> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            payload: TransitionPayload::default(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Reference a guard by name (optional).
    pub fn guard(mut self, guard: impl Into<String>) -> Self {
        self.payload.guard = Some(guard.into());
        self
    }

    /// Reference an action by name (optional).
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.payload.action = Some(action.into());
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            to,
            payload: self.payload,
        })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
