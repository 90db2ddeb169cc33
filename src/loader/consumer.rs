//! Boundary to the state machine engine that receives transitions.

use crate::core::{State, Transition};

/// A state machine engine accepting transitions one at a time.
///
/// Implementations return how many concrete transitions they registered.
/// A pattern transition may expand into several, a duplicate may register
/// none. Engines are expected to keep the first state instance they see
/// under a given name and ignore later ones with the same name.
///
/// # Example
///
/// ```rust
/// use loadstate::core::{State, Transition};
/// use loadstate::loader::TransitionConsumer;
///
/// #[derive(Default)]
/// struct Names(Vec<String>);
///
/// impl<S: State> TransitionConsumer<S> for Names {
///     type Error = std::convert::Infallible;
///
///     fn add_transition(&mut self, transition: &Transition<S>) -> Result<usize, Self::Error> {
///         self.0.push(transition.name());
///         Ok(1)
///     }
/// }
/// ```
pub trait TransitionConsumer<S: State> {
    /// Rejection raised by the engine. Passed through the loader unchanged.
    type Error;

    /// Register one transition, returning the number of concrete
    /// registrations it produced.
    fn add_transition(&mut self, transition: &Transition<S>) -> Result<usize, Self::Error>;
}

impl<S: State, C: TransitionConsumer<S> + ?Sized> TransitionConsumer<S> for &mut C {
    type Error = C::Error;

    fn add_transition(&mut self, transition: &Transition<S>) -> Result<usize, Self::Error> {
        (**self).add_transition(transition)
    }
}
