//! Tree entry point.

use crate::{Node, Payload, Status};

/// Owning handle for a behavior tree and its sole external entry point.
///
/// A `Tree` is constructed empty, given a root once via [`set_root`], then
/// ticked once per control cycle via [`tick_root`] with fresh payload borrows
/// each call. Dropping the tree releases the entire subtree through the
/// single ownership chain.
///
/// [`set_root`]: Tree::set_root
/// [`tick_root`]: Tree::tick_root
///
/// # Example
///
/// ```
/// use tinybt::{Node, Status, Tree};
///
/// struct Noop;
/// impl Node<()> for Noop {
///     fn tick(&self, _args: ()) -> Status {
///         Status::Success
///     }
/// }
///
/// let mut tree: Tree<()> = Tree::new();
/// tree.set_root(Box::new(Noop));
/// assert_eq!(tree.tick_root(()), Status::Success);
/// ```
pub struct Tree<P: Payload> {
    root: Option<Box<dyn Node<P>>>,
}

impl<P: Payload> Tree<P> {
    /// Creates an empty tree with no root attached.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Attaches the owned root, replacing (and dropping) any previous root.
    pub fn set_root(&mut self, root: Box<dyn Node<P>>) {
        self.root = Some(root);
    }

    /// Ticks the root for the current control cycle and returns its status.
    ///
    /// Ticking a tree with no root attached is not an error: nothing is
    /// visited and `Status::Idle` is returned.
    pub fn tick_root(&self, args: P::Args<'_>) -> Status {
        match &self.root {
            Some(root) => {
                let status = root.tick(args);
                tracing::trace!(%status, "tick completed");
                status
            }
            None => {
                tracing::trace!("tick_root on an empty tree; nothing to do");
                Status::Idle
            }
        }
    }
}

impl<P: Payload> Default for Tree<P> {
    fn default() -> Self {
        Self::new()
    }
}
