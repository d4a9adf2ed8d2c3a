//! Fixed-delay deferred work.
//!
//! Tasks are queued with a due time and handed back, oldest due first, once
//! the event loop ticks past it. Queued tasks cannot be cancelled.

use std::time::{Duration, Instant};

/// Delay before a search result's displacement filter is applied.
pub const SEARCH_SELECT_DELAY: Duration = Duration::from_millis(300);

/// Delay before the lead modal closes after submission.
pub const LEAD_CLOSE_DELAY: Duration = Duration::from_secs(1);

/// Delay before a closed zoom overlay releases its image.
pub const ZOOM_CLEAR_DELAY: Duration = Duration::from_millis(300);

/// Queue of tasks due at a future instant.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    queue: Vec<(Instant, u64, T)>,
    sequence: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            sequence: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` to run `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) {
        self.queue.push((now + delay, self.sequence, task));
        self.sequence += 1;
    }

    /// Removes and returns every task due at `now`, in due order.
    ///
    /// Tasks due at the same instant come back in the order they were queued.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|(at, _, _)| *at <= now);
        self.queue = pending;
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, task)| task).collect()
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_only_due_tasks() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_secs(1), "close");
        scheduler.schedule(start, Duration::from_millis(300), "clear");

        assert!(scheduler.drain_due(start + Duration::from_millis(100)).is_empty());
        assert_eq!(
            scheduler.drain_due(start + Duration::from_millis(300)),
            vec!["clear"]
        );
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.drain_due(start + Duration::from_secs(2)), vec!["close"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_same_due_time_keeps_queue_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ZOOM_CLEAR_DELAY, 1);
        scheduler.schedule(start, SEARCH_SELECT_DELAY, 2);
        assert_eq!(scheduler.drain_due(start + LEAD_CLOSE_DELAY), vec![1, 2]);
    }
}
