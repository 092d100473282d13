//! Clocked Element Interface.
//!
//! Every stateful element of the core is stepped in two phases:
//! 1. **Evaluate:** Compute the next state from the pre-edge state and the
//!    sampled inputs. Takes `&self`, so no element can observe another
//!    element's next state while it is being computed.
//! 2. **Commit:** Install the previously computed next state.
//!
//! The core evaluates every element before committing any of them.

/// A register block with combinational next-state logic.
pub trait Clocked {
    /// Signals sampled at the clock edge.
    type Inputs;

    /// Next-state value produced by the evaluate phase.
    type Next;

    /// Computes the next state without mutating anything.
    fn evaluate(&self, inputs: Self::Inputs) -> Self::Next;

    /// Installs a next state computed by [`Clocked::evaluate`].
    fn commit(&mut self, next: Self::Next);
}
