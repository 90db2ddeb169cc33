//! Core entity types.
//!
//! This module contains the values the loader inspects:
//! - States via the `State` trait and the `NamedState` value type
//! - Transitions and their opaque payload
//! - Transition identity and its pure derivation function
//!
//! Everything here is immutable data with pure accessors.

mod key;
mod state;
mod transition;

pub use key::{transition_key, TransitionKey};
pub use state::{NamedState, State};
pub use transition::{Transition, TransitionPayload};
