//! Builder API for ergonomic transition construction.
//!
//! Transitions are plain data, so these helpers only save typing; upstream
//! configuration layers can just as well build `Transition` values directly
//! or hand JSON records to the registry.

pub mod error;
pub mod transition;

pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::core::{NamedState, State, Transition, TransitionPayload};

/// Create a transition with an empty payload.
///
/// # Example
///
/// ```
/// use loadstate::builder::simple_transition;
/// use loadstate::core::NamedState;
///
/// let transition = simple_transition(NamedState::pattern("draft|review"), NamedState::literal("archived"));
/// assert!(transition.has_pattern());
/// ```
pub fn simple_transition<S: State>(from: S, to: S) -> Transition<S> {
    Transition {
        from,
        to,
        payload: TransitionPayload::default(),
    }
}

/// Create a transition between two literal state names.
///
/// # Example
///
/// ```
/// use loadstate::builder::literal_transition;
///
/// let transition = literal_transition("draft", "review");
/// assert_eq!(transition.name(), "draft_to_review");
/// assert!(!transition.has_pattern());
/// ```
pub fn literal_transition(from: &str, to: &str) -> Transition<NamedState> {
    simple_transition(NamedState::literal(from), NamedState::literal(to))
}

/// Create a transition whose origin is a pattern and whose destination is a
/// literal state name.
///
/// # Example
///
/// ```
/// use loadstate::builder::pattern_transition;
/// use loadstate::core::State;
///
/// let transition = pattern_transition("draft|review", "archived");
/// assert!(transition.from.is_pattern());
/// assert!(!transition.to.is_pattern());
/// assert_eq!(transition.name(), "draft|review_to_archived");
/// ```
pub fn pattern_transition(from: &str, to: &str) -> Transition<NamedState> {
    simple_transition(NamedState::pattern(from), NamedState::literal(to))
}
