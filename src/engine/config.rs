//! Engine configuration.

/// Extra slots on top of `n * n` for the static free-set bound.
pub const FREE_SET_SLACK: usize = 5;

/// Capacity policy for the free-set queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FreeSetCapacity {
    /// Grow as needed; can never overflow
    #[default]
    Unbounded,
    /// Fail with `Overflow` once this many proposers are queued
    Bounded(usize),
}

/// Options for a [`MatchingEngine`](crate::engine::MatchingEngine) run.
///
/// ```
/// use stable_match::engine::{EngineConfig, FreeSetCapacity};
///
/// let config = EngineConfig::with_static_bound(4).record_events(true);
/// assert_eq!(config.free_set_capacity, FreeSetCapacity::Bounded(21));
/// assert!(config.record_events);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Free-set queue sizing
    pub free_set_capacity: FreeSetCapacity,

    /// Keep the full engage/reject event log in the result
    pub record_events: bool,
}

impl EngineConfig {
    /// Config with the classic `n * n + 5` free-set bound
    pub fn with_static_bound(group_size: usize) -> Self {
        let capacity = group_size
            .saturating_mul(group_size)
            .saturating_add(FREE_SET_SLACK);
        Self {
            free_set_capacity: FreeSetCapacity::Bounded(capacity),
            ..Self::default()
        }
    }

    /// Set the free-set capacity policy
    #[must_use]
    pub fn free_set_capacity(mut self, capacity: FreeSetCapacity) -> Self {
        self.free_set_capacity = capacity;
        self
    }

    /// Enable or disable event recording
    #[must_use]
    pub fn record_events(mut self, enable: bool) -> Self {
        self.record_events = enable;
        self
    }
}
