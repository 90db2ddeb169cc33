//! Loadstate: deterministic transition loading for state machine runtimes
//!
//! Loadstate takes an unordered pile of transition definitions, deduplicates
//! them by their (origin, destination) names and registers them with a state
//! machine engine in an order that is safe for pattern states.
//!
//! # Core Concepts
//!
//! - **State**: Named states via the `State` trait, optionally pattern-based
//! - **Registry**: Insertion-ordered store where the last write per key wins
//! - **Loader**: Registers literal transitions first, pattern ones after
//! - **Consumer**: The engine receiving transitions, behind `TransitionConsumer`
//!
//! # Example
//!
//! ```rust
//! use loadstate::builder::{literal_transition, simple_transition};
//! use loadstate::core::{NamedState, Transition};
//! use loadstate::loader::{load, TransitionConsumer};
//! use loadstate::registry::TransitionRegistry;
//!
//! #[derive(Default)]
//! struct Engine {
//!     order: Vec<String>,
//! }
//!
//! impl TransitionConsumer<NamedState> for Engine {
//!     type Error = String;
//!
//!     fn add_transition(&mut self, t: &Transition<NamedState>) -> Result<usize, String> {
//!         self.order.push(t.name());
//!         Ok(1)
//!     }
//! }
//!
//! let registry = TransitionRegistry::new(vec![
//!     simple_transition(NamedState::pattern("new|paid"), NamedState::literal("cancelled")),
//!     literal_transition("new", "paid"),
//!     literal_transition("paid", "shipped"),
//! ]);
//!
//! let mut engine = Engine::default();
//! let registered = load(&registry, &mut engine).unwrap();
//!
//! assert_eq!(registered, 3);
//! assert_eq!(engine.order[2], "new|paid_to_cancelled");
//! ```

pub mod builder;
pub mod core;
pub mod loader;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{NamedState, State, Transition, TransitionKey};
pub use crate::loader::{load, Loader, TransitionConsumer, TransitionLoader};
pub use crate::registry::{RegistryError, TransitionRegistry};
