//! Transition identity.
//!
//! A transition is identified by the names of its two ends and nothing else.
//! Payload, pattern flags and object identity play no part.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a transition: the (origin name, destination name) pair.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TransitionKey {
    from: String,
    to: String,
}

impl TransitionKey {
    /// Origin state name.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Destination state name.
    pub fn to(&self) -> &str {
        &self.to
    }
}

/// Derive the key for a transition between two state names.
///
/// # Example
///
/// ```rust
/// use loadstate::core::transition_key;
///
/// let key = transition_key("new", "paid");
/// assert_eq!(key, transition_key("new", "paid"));
/// assert_ne!(key, transition_key("paid", "new"));
/// assert_eq!(key.to_string(), "new_to_paid");
/// ```
pub fn transition_key(from: &str, to: &str) -> TransitionKey {
    TransitionKey {
        from: from.to_owned(),
        to: to.to_owned(),
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_to_{}", self.from, self.to)
    }
}
