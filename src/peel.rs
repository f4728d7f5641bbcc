//! Payload projection.
//!
//! A [`Peel`] node bridges a subtree whose payload type list differs from its
//! ancestor's. It owns exactly one child and a pure projection function that
//! builds the child's argument tuple out of the parent's, so a deeply nested
//! tree can narrow or reshape its inputs at every level instead of threading
//! one monolithic context everywhere. Every edge stays fully typed at compile
//! time; there is no runtime type inspection and no boxing of payload values.

use std::marker::PhantomData;

use crate::{Node, Payload, Status};

/// A pure projection from a parent argument tuple to a child argument tuple,
/// for one borrow lifetime.
///
/// This is a blanket-implemented alias trait: anything callable as
/// `Fn(P::Args<'a>) -> Q::Args<'a>` implements it. [`Peel`] requires the
/// projection to work for *every* borrow lifetime via a
/// `for<'a> ProjectFn<'a, P, Q>` bound; a lifetime used only inside
/// associated-type projections cannot appear in a plain higher-ranked `fn`
/// pointer type, which is why the bound goes through this trait. A function
/// written as
///
/// ```ignore
/// fn project<'a>(args: (&'a mut Parent,)) -> (&'a mut Child,)
/// ```
///
/// satisfies the bound. Projections must be pure: build the child arguments
/// from the parent arguments and nothing else.
pub trait ProjectFn<'a, P: Payload, Q: Payload>: Fn(P::Args<'a>) -> Q::Args<'a> {}

impl<'a, P: Payload, Q: Payload, F> ProjectFn<'a, P, Q> for F where
    F: Fn(P::Args<'a>) -> Q::Args<'a>
{
}

/// Adapts a child with payload list `Q` into a tree position expecting `P`.
///
/// On every tick the peel applies its projection to the incoming arguments
/// and delegates to the child; the child's [`Status`] is returned unchanged.
/// A peel itself can never fail.
///
/// Peels compose: an arbitrary chain of peels may be stacked, each performing
/// an independent projection, and sibling peels under one composite may each
/// project a different sub-view of the same parent payload.
///
/// # Example
///
/// ```
/// use tinybt::{Node, Peel, Status};
///
/// struct Body { left_arm: String, right_arm: String }
///
/// struct PrintArm;
/// impl Node<(String,)> for PrintArm {
///     fn tick(&self, (arm,): (&mut String,)) -> Status {
///         println!("{arm}");
///         Status::Success
///     }
/// }
///
/// fn left<'a>(args: (&'a mut Body,)) -> (&'a mut String,) {
///     (&mut args.0.left_arm,)
/// }
///
/// let peel = Peel::<(Body,), (String,), _>::with_child(left, Box::new(PrintArm));
/// let mut body = Body { left_arm: "left".into(), right_arm: "right".into() };
/// assert_eq!(peel.tick((&mut body,)), Status::Success);
/// ```
pub struct Peel<P: Payload, Q: Payload, F>
where
    F: for<'a> ProjectFn<'a, P, Q>,
{
    project: F,
    child: Option<Box<dyn Node<Q>>>,
    _parent: PhantomData<fn() -> P>,
}

impl<P: Payload, Q: Payload, F> Peel<P, Q, F>
where
    F: for<'a> ProjectFn<'a, P, Q>,
{
    /// Creates a peel with no child attached yet.
    pub fn new(project: F) -> Self {
        Self {
            project,
            child: None,
            _parent: PhantomData,
        }
    }

    /// Creates a peel with its child attached in one step.
    pub fn with_child(project: F, child: Box<dyn Node<Q>>) -> Self {
        Self {
            project,
            child: Some(child),
            _parent: PhantomData,
        }
    }

    /// Attaches the single owned child.
    ///
    /// Must be called before the peel is ticked, during tree assembly.
    ///
    /// # Panics
    ///
    /// Panics if a child is already attached.
    pub fn set_child(&mut self, child: Box<dyn Node<Q>>) {
        assert!(
            self.child.is_none(),
            "Peel child may only be attached once"
        );
        self.child = Some(child);
    }
}

impl<P: Payload, Q: Payload, F> Node<P> for Peel<P, Q, F>
where
    F: for<'a> ProjectFn<'a, P, Q> + Send + Sync,
{
    /// # Panics
    ///
    /// Panics if no child was attached; ticking a childless peel is a tree
    /// assembly bug.
    fn tick(&self, args: P::Args<'_>) -> Status {
        let child = self
            .child
            .as_ref()
            .expect("Peel ticked without a child attached");
        child.tick((self.project)(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;

    struct Inner {
        value: i32,
    }

    struct Outer {
        inner: Inner,
        tag: String,
    }

    struct AddOne;
    impl Node<(i32,)> for AddOne {
        fn tick(&self, (value,): (&mut i32,)) -> Status {
            *value += 1;
            Status::Success
        }
    }

    struct PushDot;
    impl Node<(String,)> for PushDot {
        fn tick(&self, (tag,): (&mut String,)) -> Status {
            tag.push('.');
            Status::Success
        }
    }

    fn peel_inner<'a>(args: (&'a mut Outer,)) -> (&'a mut Inner,) {
        (&mut args.0.inner,)
    }

    fn peel_value<'a>(args: (&'a mut Inner,)) -> (&'a mut i32,) {
        (&mut args.0.value,)
    }

    fn peel_value_direct<'a>(args: (&'a mut Outer,)) -> (&'a mut i32,) {
        (&mut args.0.inner.value,)
    }

    fn peel_tag<'a>(args: (&'a mut Outer,)) -> (&'a mut String,) {
        (&mut args.0.tag,)
    }

    fn outer() -> Outer {
        Outer {
            inner: Inner { value: 0 },
            tag: String::new(),
        }
    }

    #[test]
    fn projects_then_delegates() {
        let peel =
            Peel::<(Outer,), (i32,), _>::with_child(peel_value_direct, Box::new(AddOne));

        let mut state = outer();
        assert_eq!(peel.tick((&mut state,)), Status::Success);
        assert_eq!(state.inner.value, 1);
    }

    #[test]
    fn stacked_peels_match_fused_projection() {
        // Outer -> Inner -> i32, stacked.
        let stacked = Peel::<(Outer,), (Inner,), _>::with_child(
            peel_inner,
            Box::new(Peel::<(Inner,), (i32,), _>::with_child(
                peel_value,
                Box::new(AddOne),
            )),
        );

        // Outer -> i32 in a single projection.
        let fused =
            Peel::<(Outer,), (i32,), _>::with_child(peel_value_direct, Box::new(AddOne));

        let mut via_stack = outer();
        let mut via_fuse = outer();
        assert_eq!(stacked.tick((&mut via_stack,)), Status::Success);
        assert_eq!(fused.tick((&mut via_fuse,)), Status::Success);
        assert_eq!(via_stack.inner.value, via_fuse.inner.value);
    }

    #[test]
    fn sibling_peels_project_distinct_views() {
        let seq = Sequence::new(vec![
            Box::new(Peel::<(Outer,), (i32,), _>::with_child(
                peel_value_direct,
                Box::new(AddOne),
            )) as Box<dyn Node<(Outer,)>>,
            Box::new(Peel::<(Outer,), (String,), _>::with_child(
                peel_tag,
                Box::new(PushDot),
            )),
        ]);

        let mut state = outer();
        assert_eq!(seq.tick((&mut state,)), Status::Success);
        assert_eq!(state.inner.value, 1);
        assert_eq!(state.tag, ".");
    }

    #[test]
    fn projection_can_reorder_elements() {
        struct TagWithNumber;
        impl Node<(String, i32)> for TagWithNumber {
            fn tick(&self, (tag, number): (&mut String, &mut i32)) -> Status {
                tag.push_str(&number.to_string());
                Status::Success
            }
        }

        fn swap<'a>(args: (&'a mut i32, &'a mut String)) -> (&'a mut String, &'a mut i32) {
            (args.1, args.0)
        }

        let peel =
            Peel::<(i32, String), (String, i32), _>::with_child(swap, Box::new(TagWithNumber));

        let mut number = 7;
        let mut tag = String::from("#");
        assert_eq!(peel.tick((&mut number, &mut tag)), Status::Success);
        assert_eq!(tag, "#7");
    }

    #[test]
    fn child_status_is_returned_unchanged() {
        struct Fails;
        impl Node<(i32,)> for Fails {
            fn tick(&self, _args: (&mut i32,)) -> Status {
                Status::Failure
            }
        }

        let peel = Peel::<(Outer,), (i32,), _>::with_child(peel_value_direct, Box::new(Fails));

        let mut state = outer();
        assert_eq!(peel.tick((&mut state,)), Status::Failure);
    }

    #[test]
    #[should_panic(expected = "Peel ticked without a child")]
    fn ticking_without_child_panics() {
        let peel = Peel::<(Outer,), (i32,), _>::new(peel_value_direct);

        let mut state = outer();
        let _ = peel.tick((&mut state,));
    }

    #[test]
    #[should_panic(expected = "attached once")]
    fn attaching_child_twice_panics() {
        let mut peel = Peel::<(Outer,), (i32,), _>::new(peel_value_direct);
        peel.set_child(Box::new(AddOne));
        peel.set_child(Box::new(AddOne));
    }
}
