//! Builder utilities for ergonomic tree construction.
//!
//! Helper functions that cut down on `Box::new(...)` boilerplate when
//! assembling trees. Instead of `Box::new(Sequence::new(vec![...]))` you can
//! write `sequence(vec![...])`.

use crate::{AlwaysSucceed, Fallback, Inverter, Node, Payload, Peel, ProjectFn, Sequence};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<P: Payload>(children: Vec<Box<dyn Node<P>>>) -> Box<dyn Node<P>> {
    Box::new(Sequence::new(children))
}

/// Creates a fallback node.
///
/// Shorthand for `Box::new(Fallback::new(children))`.
#[inline]
pub fn fallback<P: Payload>(children: Vec<Box<dyn Node<P>>>) -> Box<dyn Node<P>> {
    Box::new(Fallback::new(children))
}

/// Creates a peel node with its child attached.
///
/// The payload lists rarely infer from the projection alone, so call sites
/// usually name them: `peel::<(Agent, Door), (Door,), _>(project, child)`.
#[inline]
pub fn peel<P: Payload, Q: Payload, F>(
    project: F,
    child: Box<dyn Node<Q>>,
) -> Box<dyn Node<P>>
where
    F: for<'a> ProjectFn<'a, P, Q> + Send + Sync + 'static,
{
    Box::new(Peel::with_child(project, child))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<P: Payload>(child: Box<dyn Node<P>>) -> Box<dyn Node<P>> {
    Box::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<P: Payload>(child: Box<dyn Node<P>>) -> Box<dyn Node<P>> {
    Box::new(AlwaysSucceed::new(child))
}
