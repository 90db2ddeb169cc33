//! State trait and the named state value type.
//!
//! The loader only ever asks a state two things: its name and whether that
//! name is a pattern to be resolved against concrete states by the consumer.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for states referenced by transitions.
///
/// All methods are pure. States are immutable values owned by whoever built
/// them; the registry and loader only read them.
///
/// # Example
///
/// ```rust
/// use loadstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum OrderState {
///     New,
///     Shipped,
///     AnyOpen,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::New => "new",
///             Self::Shipped => "shipped",
///             Self::AnyOpen => "new|pending",
///         }
///     }
///
///     fn is_pattern(&self) -> bool {
///         matches!(self, Self::AnyOpen)
///     }
/// }
///
/// assert!(!OrderState::New.is_pattern());
/// assert!(OrderState::AnyOpen.is_pattern());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name. For pattern states this is the match expression.
    fn name(&self) -> &str;

    /// Whether the name is a pattern matched against several concrete
    /// state names at consumption time.
    ///
    /// Default implementation returns `false`.
    fn is_pattern(&self) -> bool {
        false
    }
}

/// A state described by a name and a pattern flag.
///
/// This is the shape upstream configuration layers produce; it deserializes
/// from `{"name": "...", "pattern": true}` with `pattern` defaulting to
/// `false`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NamedState {
    name: String,
    #[serde(default)]
    pattern: bool,
}

impl NamedState {
    /// A state whose name is a literal identifier.
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: false,
        }
    }

    /// A state whose name is a match expression.
    pub fn pattern(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: true,
        }
    }
}

impl State for NamedState {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_pattern(&self) -> bool {
        self.pattern
    }
}

impl fmt::Display for NamedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pattern {
            write!(f, "pattern:{}", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}
