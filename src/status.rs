//! Status returned by behavior tree nodes.

/// The result of ticking a node.
///
/// Unlike two-valued designs, this engine keeps the full four-valued status
/// so leaves can report long-running or not-yet-started work. Note that the
/// composites in this crate deliberately do **not** suspend on `Running`;
/// see [`crate::Sequence`] and [`crate::Fallback`] for the exact policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Status {
    /// The node has not done anything this tick.
    Idle,

    /// The node started work that has not completed yet.
    ///
    /// The engine holds no inter-tick state, so a `Running` leaf is expected
    /// to pick its work back up from external state on the next tick.
    Running,

    /// The node completed successfully.
    ///
    /// For conditions: the condition was met.
    /// For actions: the action executed without errors.
    Success,

    /// The node failed.
    ///
    /// `Failure` is an expected control-flow outcome handled by parent
    /// composites, not an error.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Swaps `Success` and `Failure`, leaving `Idle` and `Running` unchanged.
    ///
    /// This is useful for implementing negation logic.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_swaps_success_and_failure() {
        assert_eq!(Status::Success.invert(), Status::Failure);
        assert_eq!(Status::Failure.invert(), Status::Success);
    }

    #[test]
    fn invert_leaves_idle_and_running_alone() {
        assert_eq!(Status::Idle.invert(), Status::Idle);
        assert_eq!(Status::Running.invert(), Status::Running);
    }
}
