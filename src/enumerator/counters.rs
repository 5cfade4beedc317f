use std::time::Duration;

/// Counts of an enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every call made to the backend.
    pub rounds: usize,

    /// A count of colorings returned.
    pub found: usize,

    /// The time spent within the backend, over every round.
    pub backend_time: Duration,
}
