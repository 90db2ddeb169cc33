//! Ordering transitions and feeding them to a state machine engine.
//!
//! Transitions between literal states are always registered before any
//! transition that touches a pattern state. Engines resolve patterns against
//! the concrete states they already know, so registering patterns last lets
//! them match every concrete state the load introduces, whatever order the
//! caller supplied.
//!
//! # Example
//!
//! ```rust
//! use loadstate::core::{NamedState, Transition, TransitionPayload};
//! use loadstate::loader::{Loader, TransitionConsumer, TransitionLoader};
//! use loadstate::registry::TransitionRegistry;
//!
//! #[derive(Default)]
//! struct Recorder(Vec<String>);
//!
//! impl TransitionConsumer<NamedState> for Recorder {
//!     type Error = String;
//!
//!     fn add_transition(&mut self, t: &Transition<NamedState>) -> Result<usize, String> {
//!         self.0.push(t.name());
//!         Ok(1)
//!     }
//! }
//!
//! let edge = |from: NamedState, to: &str| Transition {
//!     from,
//!     to: NamedState::literal(to),
//!     payload: TransitionPayload::default(),
//! };
//!
//! let loader = TransitionLoader::new(TransitionRegistry::new(vec![
//!     edge(NamedState::pattern("s.*"), "done"),
//!     edge(NamedState::literal("s1"), "s2"),
//! ]));
//!
//! let mut recorder = Recorder::default();
//! assert_eq!(loader.load(&mut recorder), Ok(2));
//! assert_eq!(recorder.0, vec!["s1_to_s2", "s.*_to_done"]);
//! ```

mod consumer;
mod partition;

pub use consumer::TransitionConsumer;
pub use partition::partition_stable;

use crate::core::State;
use crate::registry::TransitionRegistry;
use std::fmt;
use tracing::{debug, info, warn};

/// Something that can register its transitions with an engine.
///
/// Loaders reading transitions from other sources are expected to build a
/// [`TransitionRegistry`] and delegate to it, so that every source shares
/// the same deduplication and ordering rules.
pub trait Loader<S: State> {
    /// Register every transition with `consumer`, returning the summed
    /// registration count.
    fn load<C: TransitionConsumer<S>>(&self, consumer: &mut C) -> Result<usize, C::Error>;

    /// Number of distinct transitions that will be offered.
    fn count(&self) -> usize;
}

/// Offer every transition in `registry` to `consumer`, literal ones first.
///
/// Consumer errors abort the load immediately and are returned unchanged.
/// Transitions registered before the failure stay registered.
pub fn load<S, C>(registry: &TransitionRegistry<S>, consumer: &mut C) -> Result<usize, C::Error>
where
    S: State,
    C: TransitionConsumer<S>,
{
    let (exact, patterns) = partition_stable(registry.all(), |t| t.has_pattern());

    let mut registered = 0;
    for transition in exact.iter().chain(patterns.iter()) {
        debug!(
            transition = %transition.name(),
            pattern = transition.has_pattern(),
            "offering transition"
        );

        match consumer.add_transition(transition) {
            Ok(count) => registered += count,
            Err(e) => {
                warn!(
                    transition = %transition.name(),
                    registered,
                    "consumer rejected transition, aborting load"
                );
                return Err(e);
            }
        }
    }

    info!(
        exact = exact.len(),
        patterns = patterns.len(),
        registered,
        "transitions loaded"
    );
    Ok(registered)
}

impl<S: State> Loader<S> for TransitionRegistry<S> {
    fn load<C: TransitionConsumer<S>>(&self, consumer: &mut C) -> Result<usize, C::Error> {
        load(self, consumer)
    }

    fn count(&self) -> usize {
        self.size()
    }
}

/// Loader owning the registry for the duration of one load.
#[derive(Clone, Debug)]
pub struct TransitionLoader<S: State> {
    registry: TransitionRegistry<S>,
}

impl<S: State> TransitionLoader<S> {
    /// Wrap a populated registry.
    pub fn new(registry: TransitionRegistry<S>) -> Self {
        Self { registry }
    }

    /// The registry that will be loaded.
    pub fn registry(&self) -> &TransitionRegistry<S> {
        &self.registry
    }

    /// Give the registry back, consuming the loader.
    pub fn into_registry(self) -> TransitionRegistry<S> {
        self.registry
    }
}

impl<S: State> Loader<S> for TransitionLoader<S> {
    fn load<C: TransitionConsumer<S>>(&self, consumer: &mut C) -> Result<usize, C::Error> {
        load(&self.registry, consumer)
    }

    fn count(&self) -> usize {
        self.registry.size()
    }
}

impl<S: State> From<TransitionRegistry<S>> for TransitionLoader<S> {
    fn from(registry: TransitionRegistry<S>) -> Self {
        Self::new(registry)
    }
}

impl<S: State> fmt::Display for TransitionLoader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitionLoader({} transitions)", self.count())
    }
}
