//! Composite nodes.
//!
//! Composites own an ordered list of children that all share the parent's
//! payload type list, and aggregate their statuses under a fixed policy:
//! [`Sequence`] (AND logic) and [`Fallback`] (OR logic).
//!
//! # Running/Idle pass-through
//!
//! Both composites discriminate exactly one status. `Sequence` stops only on
//! `Failure` and `Fallback` stops only on `Success`; a child returning
//! `Running` or `Idle` does **not** pause the composite, iteration simply
//! moves on to the next child. This differs from behavior tree designs that
//! suspend on a `Running` child and resume it next tick. It is a deliberate,
//! compatibility-relevant policy, not an oversight; do not change it without
//! revisiting every tree built on it.

use crate::{Node, Payload, Status};

/// Ticks children in insertion order until one fails.
///
/// # Semantics
///
/// - A child returning `Failure` stops the sequence immediately with `Failure`.
/// - Any other status (`Success`, `Running`, `Idle`) moves on to the next child.
/// - If no child fails, the sequence returns `Success`.
/// - A sequence with no children returns `Success` (vacuous success).
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<P: Payload> {
    children: Vec<Box<dyn Node<P>>>,
}

impl<P: Payload> Sequence<P> {
    /// Creates a sequence with the given children. An empty list is legal.
    pub fn new(children: Vec<Box<dyn Node<P>>>) -> Self {
        Self { children }
    }

    /// Appends a child. Children can only be added, never removed.
    pub fn add_child(&mut self, child: Box<dyn Node<P>>) {
        self.children.push(child);
    }
}

impl<P: Payload> Default for Sequence<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P: Payload> Node<P> for Sequence<P> {
    fn tick(&self, mut args: P::Args<'_>) -> Status {
        for (index, child) in self.children.iter().enumerate() {
            if child.tick(P::reborrow(&mut args)).is_failure() {
                tracing::trace!(index, "sequence short-circuits on Failure");
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Ticks children in insertion order until one succeeds.
///
/// # Semantics
///
/// - A child returning `Success` stops the fallback immediately with `Success`.
/// - Any other status (`Failure`, `Running`, `Idle`) moves on to the next child.
/// - If no child succeeds, the fallback returns `Failure`.
/// - A fallback with no children returns `Failure` (vacuous failure, the dual
///   of the empty sequence).
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Fallback<P: Payload> {
    children: Vec<Box<dyn Node<P>>>,
}

impl<P: Payload> Fallback<P> {
    /// Creates a fallback with the given children. An empty list is legal.
    pub fn new(children: Vec<Box<dyn Node<P>>>) -> Self {
        Self { children }
    }

    /// Appends a child. Children can only be added, never removed.
    pub fn add_child(&mut self, child: Box<dyn Node<P>>) {
        self.children.push(child);
    }
}

impl<P: Payload> Default for Fallback<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P: Payload> Node<P> for Fallback<P> {
    fn tick(&self, mut args: P::Args<'_>) -> Status {
        for (index, child) in self.children.iter().enumerate() {
            if child.tick(P::reborrow(&mut args)).is_success() {
                tracing::trace!(index, "fallback short-circuits on Success");
                return Status::Success;
            }
        }
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records its id into the payload log, then returns a fixed status.
    struct Probe {
        id: usize,
        result: Status,
    }

    impl Node<(Vec<usize>,)> for Probe {
        fn tick(&self, (log,): (&mut Vec<usize>,)) -> Status {
            log.push(self.id);
            self.result
        }
    }

    fn probe(id: usize, result: Status) -> Box<dyn Node<(Vec<usize>,)>> {
        Box::new(Probe { id, result })
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new(vec![
            probe(0, Status::Success),
            probe(1, Status::Success),
        ]);

        let mut log = Vec::new();
        assert_eq!(seq.tick((&mut log,)), Status::Success);
        assert_eq!(log, vec![0, 1]);
    }

    #[test]
    fn sequence_short_circuits_on_failure() {
        let seq = Sequence::new(vec![
            probe(0, Status::Success),
            probe(1, Status::Failure),
            probe(2, Status::Success), // never ticked
        ]);

        let mut log = Vec::new();
        assert_eq!(seq.tick((&mut log,)), Status::Failure);
        assert_eq!(log, vec![0, 1]);
    }

    #[test]
    fn sequence_passes_through_running_and_idle() {
        let seq = Sequence::new(vec![
            probe(0, Status::Running),
            probe(1, Status::Idle),
            probe(2, Status::Success),
        ]);

        let mut log = Vec::new();
        assert_eq!(seq.tick((&mut log,)), Status::Success);
        assert_eq!(log, vec![0, 1, 2]);
    }

    #[test]
    fn empty_sequence_is_vacuous_success() {
        let seq: Sequence<(Vec<usize>,)> = Sequence::default();

        let mut log = Vec::new();
        assert_eq!(seq.tick((&mut log,)), Status::Success);
        assert!(log.is_empty());
    }

    #[test]
    fn fallback_short_circuits_on_success() {
        let fb = Fallback::new(vec![
            probe(0, Status::Failure),
            probe(1, Status::Success),
            probe(2, Status::Success), // never ticked
        ]);

        let mut log = Vec::new();
        assert_eq!(fb.tick((&mut log,)), Status::Success);
        assert_eq!(log, vec![0, 1]);
    }

    #[test]
    fn fallback_fails_when_all_fail() {
        let fb = Fallback::new(vec![probe(0, Status::Failure), probe(1, Status::Failure)]);

        let mut log = Vec::new();
        assert_eq!(fb.tick((&mut log,)), Status::Failure);
        assert_eq!(log, vec![0, 1]);
    }

    #[test]
    fn fallback_passes_through_running_and_idle() {
        let fb = Fallback::new(vec![
            probe(0, Status::Running),
            probe(1, Status::Idle),
            probe(2, Status::Failure),
        ]);

        let mut log = Vec::new();
        assert_eq!(fb.tick((&mut log,)), Status::Failure);
        assert_eq!(log, vec![0, 1, 2]);
    }

    #[test]
    fn empty_fallback_is_vacuous_failure() {
        let fb: Fallback<(Vec<usize>,)> = Fallback::default();

        let mut log = Vec::new();
        assert_eq!(fb.tick((&mut log,)), Status::Failure);
        assert!(log.is_empty());
    }

    #[test]
    fn add_child_preserves_insertion_order() {
        let mut seq = Sequence::default();
        seq.add_child(probe(7, Status::Success));
        seq.add_child(probe(8, Status::Success));

        let mut log = Vec::new();
        assert_eq!(seq.tick((&mut log,)), Status::Success);
        assert_eq!(log, vec![7, 8]);
    }
}
