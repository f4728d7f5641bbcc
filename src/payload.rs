//! Strongly typed payload passing.
//!
//! A node's payload is an ordered list of domain state types, written as a
//! tuple: `(Agent, Door)` means "this node ticks with a mutable borrow of an
//! `Agent` and a mutable borrow of a `Door`, in that order". The tuple of
//! owned types is only a type-level description; what actually flows through
//! `tick` is the borrowed argument tuple [`Payload::Args`]
//! (`(&mut Agent, &mut Door)` for the example above).
//!
//! Splitting the description from the borrow is what lets composites hand the
//! same arguments to several children in turn: [`Payload::reborrow`] shortens
//! the borrows for one child's tick without copying or cloning any state.

/// Type-level description of a node's ordered input list.
///
/// Implemented for tuples of up to eight `'static` element types, including
/// the empty tuple `()` for nodes that take no input.
///
/// # Example
///
/// ```
/// use tinybt::Payload;
///
/// let mut hp = 10_u32;
/// let mut name = String::from("goblin");
/// let mut args = (&mut hp, &mut name);
///
/// // Reborrowing yields a fresh argument tuple with shorter borrows.
/// let (hp_ref, _name_ref) = <(u32, String) as Payload>::reborrow(&mut args);
/// *hp_ref += 1;
///
/// // The original tuple is usable again afterwards.
/// assert_eq!(*args.0, 11);
/// ```
pub trait Payload: 'static {
    /// The borrowed argument tuple a node receives for one tick.
    type Args<'a>;

    /// Reborrows an argument tuple so it can be handed to a child tick while
    /// the caller keeps the original for subsequent children.
    fn reborrow<'short, 'long: 'short>(
        args: &'short mut Self::Args<'long>,
    ) -> Self::Args<'short>;
}

impl Payload for () {
    type Args<'a> = ();

    #[inline]
    fn reborrow<'short, 'long: 'short>(_args: &'short mut Self::Args<'long>) -> Self::Args<'short> {}
}

macro_rules! impl_payload_for_tuple {
    ($(($elem:ident, $idx:tt)),+) => {
        impl<$($elem: 'static),+> Payload for ($($elem,)+) {
            type Args<'a> = ($(&'a mut $elem,)+);

            #[inline]
            fn reborrow<'short, 'long: 'short>(
                args: &'short mut Self::Args<'long>,
            ) -> Self::Args<'short> {
                ($(&mut *args.$idx,)+)
            }
        }
    };
}

impl_payload_for_tuple!((T0, 0));
impl_payload_for_tuple!((T0, 0), (T1, 1));
impl_payload_for_tuple!((T0, 0), (T1, 1), (T2, 2));
impl_payload_for_tuple!((T0, 0), (T1, 1), (T2, 2), (T3, 3));
impl_payload_for_tuple!((T0, 0), (T1, 1), (T2, 2), (T3, 3), (T4, 4));
impl_payload_for_tuple!((T0, 0), (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5));
impl_payload_for_tuple!((T0, 0), (T1, 1), (T2, 2), (T3, 3), (T4, 4), (T5, 5), (T6, 6));
impl_payload_for_tuple!(
    (T0, 0),
    (T1, 1),
    (T2, 2),
    (T3, 3),
    (T4, 4),
    (T5, 5),
    (T6, 6),
    (T7, 7)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reborrow_allows_sequential_use() {
        let mut a = 0_i32;
        let mut b = String::new();
        let mut args = (&mut a, &mut b);

        for _ in 0..3 {
            let (x, s) = <(i32, String) as Payload>::reborrow(&mut args);
            *x += 1;
            s.push('.');
        }

        assert_eq!(a, 3);
        assert_eq!(b, "...");
    }
}
