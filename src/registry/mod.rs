//! Deduplicated, insertion-ordered transition storage.
//!
//! The registry keeps at most one transition per key. Adding a transition
//! under a key that is already present replaces the stored one in place:
//! the newcomer inherits the original's position in iteration order. The
//! replaced transition is dropped silently. Keeping configuration data
//! consistent is the caller's job.

pub mod error;

pub use error::RegistryError;

use crate::core::{State, Transition, TransitionKey};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Ordered, keyed collection of transitions scoped to a single load.
///
/// # Example
///
/// ```rust
/// use loadstate::core::{NamedState, Transition, TransitionPayload};
/// use loadstate::registry::TransitionRegistry;
///
/// let edge = |from: &str, to: &str, guard: Option<&str>| Transition {
///     from: NamedState::literal(from),
///     to: NamedState::literal(to),
///     payload: TransitionPayload {
///         guard: guard.map(str::to_string),
///         action: None,
///     },
/// };
///
/// let registry = TransitionRegistry::new(vec![
///     edge("a", "b", None),
///     edge("b", "c", None),
///     edge("a", "b", Some("ready")),
/// ]);
///
/// assert_eq!(registry.size(), 2);
/// let first = registry.all().next().unwrap();
/// assert_eq!(first.payload.guard.as_deref(), Some("ready"));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionRegistry<S: State> {
    transitions: IndexMap<TransitionKey, Transition<S>>,
}

impl<S: State> TransitionRegistry<S> {
    /// Build a registry by adding each transition in order.
    pub fn new(initial: impl IntoIterator<Item = Transition<S>>) -> Self {
        let mut registry = Self::default();
        for transition in initial {
            registry.add(transition);
        }
        registry
    }

    /// Build a registry from untyped records.
    ///
    /// Every value must be a JSON object describing a transition. The first
    /// value that is not fails the whole construction; nothing is kept.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Result<Self, RegistryError> {
        let transitions = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| parse_transition(index, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(transitions))
    }

    /// Add or overwrite a transition.
    pub fn add(&mut self, transition: Transition<S>) {
        let key = transition.key();
        let has_pattern = transition.has_pattern();

        if let Some(replaced) = self.transitions.insert(key.clone(), transition) {
            if replaced.has_pattern() != has_pattern {
                debug!(
                    key = %key,
                    "literal and pattern transitions share a key, keeping the latest"
                );
            } else {
                debug!(key = %key, "replacing transition with the same key");
            }
        }
    }

    /// All stored transitions in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Transition<S>> {
        self.transitions.values()
    }

    /// Look up a transition by key.
    pub fn get(&self, key: &TransitionKey) -> Option<&Transition<S>> {
        self.transitions.get(key)
    }

    /// Number of distinct keys stored.
    ///
    /// This is not the number of registrations a load will produce, since
    /// pattern transitions may expand inside the consumer.
    pub fn size(&self) -> usize {
        self.transitions.len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// True when no transition is stored.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S: State> Default for TransitionRegistry<S> {
    fn default() -> Self {
        Self {
            transitions: IndexMap::new(),
        }
    }
}

impl<S: State> FromIterator<Transition<S>> for TransitionRegistry<S> {
    fn from_iter<I: IntoIterator<Item = Transition<S>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: State> fmt::Display for TransitionRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitionRegistry({} transitions)", self.size())
    }
}

fn parse_transition<S: State>(index: usize, value: Value) -> Result<Transition<S>, RegistryError> {
    let found = json_kind(&value);

    // Serde would also accept a struct spelled as an array; only objects
    // count as transition records.
    if !value.is_object() {
        return Err(RegistryError::InvalidInputKind {
            index,
            found,
            reason: "not a transition record".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| RegistryError::InvalidInputKind {
        index,
        found,
        reason: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{transition_key, NamedState, TransitionPayload};
    use serde_json::json;

    fn exact(from: &str, to: &str) -> Transition<NamedState> {
        Transition {
            from: NamedState::literal(from),
            to: NamedState::literal(to),
            payload: TransitionPayload::default(),
        }
    }

    fn names(registry: &TransitionRegistry<NamedState>) -> Vec<String> {
        registry.all().map(Transition::name).collect()
    }

    #[test]
    fn empty_input_yields_empty_registry() {
        let registry = TransitionRegistry::<NamedState>::new(Vec::new());

        assert!(registry.is_empty());
        assert_eq!(registry.size(), 0);
        assert_eq!(registry.all().count(), 0);
    }

    #[test]
    fn distinct_keys_keep_insertion_order() {
        let registry =
            TransitionRegistry::new(vec![exact("c", "d"), exact("a", "b"), exact("b", "c")]);

        assert_eq!(registry.size(), 3);
        assert_eq!(names(&registry), vec!["c_to_d", "a_to_b", "b_to_c"]);
    }

    #[test]
    fn overwrite_keeps_original_slot() {
        let mut registry = TransitionRegistry::new(vec![exact("a", "b"), exact("b", "c")]);

        let mut replacement = exact("a", "b");
        replacement.payload.action = Some("notify".to_string());
        registry.add(replacement.clone());

        assert_eq!(registry.size(), 2);
        assert_eq!(names(&registry), vec!["a_to_b", "b_to_c"]);
        assert_eq!(registry.all().next(), Some(&replacement));
    }

    #[test]
    fn size_counts_keys_not_adds() {
        let mut registry = TransitionRegistry::default();
        for _ in 0..5 {
            registry.add(exact("a", "b"));
        }

        assert_eq!(registry.size(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn pattern_and_literal_with_same_names_collide() {
        let pattern = Transition {
            from: NamedState::pattern("a"),
            to: NamedState::literal("b"),
            payload: TransitionPayload::default(),
        };
        let registry = TransitionRegistry::new(vec![exact("a", "b"), pattern.clone()]);

        assert_eq!(registry.size(), 1);
        assert_eq!(registry.get(&transition_key("a", "b")), Some(&pattern));
    }

    #[test]
    fn get_returns_none_for_unknown_key() {
        let registry = TransitionRegistry::new(vec![exact("a", "b")]);

        assert!(registry.get(&transition_key("b", "a")).is_none());
    }

    #[test]
    fn from_values_accepts_transition_objects() {
        let registry = TransitionRegistry::<NamedState>::from_values(vec![
            json!({"from": {"name": "new"}, "to": {"name": "paid"}}),
            json!({
                "from": {"name": "paid|new", "pattern": true},
                "to": {"name": "cancelled"},
                "payload": {"guard": "can_cancel"}
            }),
        ])
        .unwrap();

        assert_eq!(registry.size(), 2);
        assert_eq!(names(&registry), vec!["new_to_paid", "paid|new_to_cancelled"]);
    }

    #[test]
    fn from_values_rejects_non_objects_naming_the_kind() {
        let result = TransitionRegistry::<NamedState>::from_values(vec![
            json!({"from": {"name": "a"}, "to": {"name": "b"}}),
            json!("a_to_c"),
            json!({"from": {"name": "c"}, "to": {"name": "d"}}),
        ]);

        match result {
            Err(RegistryError::InvalidInputKind { index, found, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(found, "string");
            }
            other => panic!("Expected InvalidInputKind, got {other:?}"),
        }
    }

    #[test]
    fn from_values_rejects_arrays_even_when_shaped_like_a_transition() {
        let result = TransitionRegistry::<NamedState>::from_values(vec![json!([
            {"name": "a"},
            {"name": "b"},
            {}
        ])]);

        assert!(matches!(
            result,
            Err(RegistryError::InvalidInputKind { found: "array", .. })
        ));
    }

    #[test]
    fn from_values_rejects_malformed_objects() {
        let result =
            TransitionRegistry::<NamedState>::from_values(vec![json!({"from": {"name": "a"}})]);

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidInputKind { found: "object", .. }
        ));
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn display_reports_size() {
        let registry = TransitionRegistry::new(vec![exact("a", "b"), exact("b", "c")]);

        assert_eq!(registry.to_string(), "TransitionRegistry(2 transitions)");
    }

    #[test]
    fn collects_from_iterator() {
        let registry: TransitionRegistry<NamedState> =
            vec![exact("a", "b"), exact("a", "b")].into_iter().collect();

        assert_eq!(registry.size(), 1);
    }
}
