//! Transition definitions as handed to the loader.

use super::key::{transition_key, TransitionKey};
use super::state::State;
use serde::{Deserialize, Serialize};

/// Guard and action references carried by a transition.
///
/// Opaque to this crate: the values are passed to the consumer untouched.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct TransitionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// A directed edge between two states.
///
/// # Example
///
/// ```rust
/// use loadstate::core::{NamedState, Transition, TransitionPayload};
///
/// let transition = Transition {
///     from: NamedState::literal("new"),
///     to: NamedState::literal("paid"),
///     payload: TransitionPayload::default(),
/// };
///
/// assert_eq!(transition.name(), "new_to_paid");
/// assert!(!transition.has_pattern());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// Origin state.
    pub from: S,
    /// Destination state.
    pub to: S,
    /// Guard and action references. Never read by the loader.
    #[serde(default)]
    pub payload: TransitionPayload,
}

impl<S: State> Transition<S> {
    /// Identity used for deduplication.
    pub fn key(&self) -> TransitionKey {
        transition_key(self.from.name(), self.to.name())
    }

    /// Human readable name, `<from>_to_<to>`.
    pub fn name(&self) -> String {
        self.key().to_string()
    }

    /// True when either end is a pattern state.
    pub fn has_pattern(&self) -> bool {
        self.from.is_pattern() || self.to.is_pattern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NamedState;

    fn transition(from: NamedState, to: NamedState) -> Transition<NamedState> {
        Transition {
            from,
            to,
            payload: TransitionPayload::default(),
        }
    }

    #[test]
    fn key_ignores_payload() {
        let plain = transition(NamedState::literal("a"), NamedState::literal("b"));
        let mut guarded = plain.clone();
        guarded.payload.guard = Some("is_paid".to_string());

        assert_ne!(plain, guarded);
        assert_eq!(plain.key(), guarded.key());
    }

    #[test]
    fn key_ignores_pattern_flag() {
        let literal = transition(NamedState::literal("a"), NamedState::literal("b"));
        let pattern = transition(NamedState::pattern("a"), NamedState::literal("b"));

        assert_eq!(literal.key(), pattern.key());
    }

    #[test]
    fn has_pattern_checks_both_ends() {
        let exact = transition(NamedState::literal("a"), NamedState::literal("b"));
        let origin = transition(NamedState::pattern("a*"), NamedState::literal("b"));
        let destination = transition(NamedState::literal("a"), NamedState::pattern("b*"));
        let both = transition(NamedState::pattern("a*"), NamedState::pattern("b*"));

        assert!(!exact.has_pattern());
        assert!(origin.has_pattern());
        assert!(destination.has_pattern());
        assert!(both.has_pattern());
    }

    #[test]
    fn payload_is_optional_when_deserializing() {
        let json = r#"{"from":{"name":"a"},"to":{"name":"b","pattern":true}}"#;
        let parsed: Transition<NamedState> = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.payload, TransitionPayload::default());
        assert!(parsed.to.is_pattern());
    }
}
