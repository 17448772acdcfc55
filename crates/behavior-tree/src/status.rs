//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Real-time Semantics
///
/// A tick is one step of a continuously running simulation:
/// - Conditions evaluate immediately (e.g., "Is an enemy within range?")
/// - Actions may span several ticks (e.g., "Turn toward the target, then strike")
///
/// `Running` is how a node asks to be called again on the next tick. The node
/// keeps whatever it needs to resume in its own fields; nothing is suspended on
/// the call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior reached its goal this tick.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action completed.
    Success,

    /// The behavior cannot proceed and owes no further work.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action had nothing valid to act on.
    Failure,

    /// The behavior is still in progress and must be re-invoked next tick.
    ///
    /// Only actions return this. Conditions never do.
    Running,
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

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Maps a predicate result onto `Success` / `Failure`.
    ///
    /// This is how condition leaves report; it can never yield `Running`.
    #[inline]
    pub fn from_check(holds: bool) -> Self {
        if holds {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
