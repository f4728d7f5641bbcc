//! Decorator nodes.
//!
//! Decorators wrap a single child with the same payload type list and modify
//! its result: [`Inverter`] (NOT logic) and [`AlwaysSucceed`] (failure
//! suppression).

use crate::{Node, Payload, Status};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - `Success` becomes `Failure` and vice versa.
/// - `Running` and `Idle` pass through unchanged, consistent with the
///   composites' pass-through policy.
pub struct Inverter<P: Payload> {
    child: Box<dyn Node<P>>,
}

impl<P: Payload> Inverter<P> {
    /// Creates an inverter that wraps the given child.
    pub fn new(child: Box<dyn Node<P>>) -> Self {
        Self { child }
    }
}

impl<P: Payload> Node<P> for Inverter<P> {
    fn tick(&self, args: P::Args<'_>) -> Status {
        self.child.tick(args).invert()
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// The child is still ticked for its side effects. Useful for optional steps
/// that must not fail an enclosing [`crate::Sequence`].
pub struct AlwaysSucceed<P: Payload> {
    child: Box<dyn Node<P>>,
}

impl<P: Payload> AlwaysSucceed<P> {
    /// Creates an always-succeed wrapper around the given child.
    pub fn new(child: Box<dyn Node<P>>) -> Self {
        Self { child }
    }
}

impl<P: Payload> Node<P> for AlwaysSucceed<P> {
    fn tick(&self, args: P::Args<'_>) -> Status {
        // Tick for effect, discard the result.
        let _ = self.child.tick(args);
        Status::Success
    }
}
