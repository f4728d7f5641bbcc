//! Core node trait.
//!
//! This module defines the [`Node`] trait, the single abstraction every
//! behavior tree participant implements. The trait is generic over a
//! [`Payload`] type list, so each subtree declares exactly the inputs it
//! needs and the compiler checks every edge of the tree.

use crate::{Payload, Status};

/// A behavior tree node that can be ticked with a typed argument list.
///
/// `tick` never mutates the tree itself; all observable effects happen
/// through the mutable borrows inside the argument tuple. Given identical
/// payload state and an unchanged tree, `tick` is deterministic. Nodes hold
/// no `Running` bookkeeping between ticks; every tick starts fresh from the
/// root.
///
/// Implementing a leaf is the one mandatory extension point for domain
/// logic:
///
/// ```
/// use tinybt::{Node, Status};
///
/// struct Heal;
///
/// impl Node<(u32,)> for Heal {
///     fn tick(&self, (hp,): (&mut u32,)) -> Status {
///         *hp += 5;
///         Status::Success
///     }
/// }
/// ```
pub trait Node<P: Payload>: Send + Sync {
    /// Ticks this node for the current control cycle.
    fn tick(&self, args: P::Args<'_>) -> Status;
}

/// Blanket implementation for boxed nodes.
///
/// This allows `Box<dyn Node<P>>` to also implement `Node<P>`, enabling
/// dynamic dispatch and heterogeneous collections of children.
impl<P: Payload> Node<P> for Box<dyn Node<P>> {
    #[inline]
    fn tick(&self, args: P::Args<'_>) -> Status {
        (**self).tick(args)
    }
}
