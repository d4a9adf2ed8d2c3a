//! Hero slide rotation state machine.
//!
//! Time is injected through `now` arguments so the rotator can be driven by
//! the terminal event loop and by tests alike.

use std::time::{Duration, Instant};
use tracing::debug;

/// Default time between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Shortest accepted interval.
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);

/// Longest accepted interval.
pub const MAX_INTERVAL: Duration = Duration::from_secs(3600);

/// Minimum horizontal travel for a swipe to count.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Rotator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorState {
    /// No slides to rotate
    Idle,
    /// Advancing on a timer
    AutoPlaying,
    /// Pointer is over the hero; timer cleared
    Paused,
}

/// Direction decided from a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide
    Next,
    /// Finger moved right: show the previous slide
    Previous,
}

/// Classifies a gesture by its deltas.
///
/// A swipe needs horizontal travel beyond [`SWIPE_THRESHOLD`] that also
/// exceeds the vertical travel.
pub fn classify_swipe(delta_x: f32, delta_y: f32) -> Option<SwipeDirection> {
    if delta_x.abs() > delta_y.abs() && delta_x.abs() > SWIPE_THRESHOLD {
        if delta_x > 0.0 {
            Some(SwipeDirection::Previous)
        } else {
            Some(SwipeDirection::Next)
        }
    } else {
        None
    }
}

/// Deadline `interval` after `from`, or the default interval when that
/// cannot be represented.
fn due_after(from: Instant, interval: Duration) -> Option<Instant> {
    from.checked_add(interval).or_else(|| from.checked_add(DEFAULT_INTERVAL))
}

/// Cycles a fixed number of slides.
#[derive(Debug, Clone)]
pub struct SlideRotator {
    slide_count: usize,
    current: usize,
    interval: Duration,
    state: RotatorState,
    next_due: Option<Instant>,
}

impl SlideRotator {
    /// Starts rotating `slide_count` slides at index 0.
    pub fn new(slide_count: usize, interval: Duration, now: Instant) -> Self {
        // A zero interval would make `tick` spin forever
        let interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
        if slide_count == 0 {
            return Self {
                slide_count,
                current: 0,
                interval,
                state: RotatorState::Idle,
                next_due: None,
            };
        }
        Self {
            slide_count,
            current: 0,
            interval,
            state: RotatorState::AutoPlaying,
            next_due: due_after(now, interval),
        }
    }

    /// Index of the active slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Current state.
    pub fn state(&self) -> RotatorState {
        self.state
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// True when `index` is the active slide.
    pub fn is_active(&self, index: usize) -> bool {
        self.state != RotatorState::Idle && index == self.current
    }

    /// Advances once per elapsed interval. Returns true if the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != RotatorState::AutoPlaying {
            return false;
        }
        let mut changed = false;
        while let Some(due) = self.next_due {
            if now < due {
                break;
            }
            self.next();
            self.next_due = due_after(due, self.interval);
            changed = true;
        }
        changed
    }

    /// Pointer entered the hero: pause and clear the timer.
    pub fn pointer_enter(&mut self) {
        if self.state == RotatorState::AutoPlaying {
            self.state = RotatorState::Paused;
            self.next_due = None;
            debug!("Hero rotation paused at slide {}", self.current);
        }
    }

    /// Pointer left the hero: resume with a fresh timer, index unchanged.
    pub fn pointer_leave(&mut self, now: Instant) {
        if self.state == RotatorState::Paused {
            self.state = RotatorState::AutoPlaying;
            self.next_due = due_after(now, self.interval);
            debug!("Hero rotation resumed at slide {}", self.current);
        }
    }

    /// Shows the next slide, wrapping to the first.
    pub fn next(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.current = (self.current + 1) % self.slide_count;
    }

    /// Shows the previous slide, wrapping to the last.
    pub fn previous(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.current = if self.current == 0 {
            self.slide_count - 1
        } else {
            self.current - 1
        };
    }

    /// Applies a swipe gesture. Returns true if it moved the rotator.
    pub fn swipe(&mut self, delta_x: f32, delta_y: f32) -> bool {
        match classify_swipe(delta_x, delta_y) {
            Some(SwipeDirection::Next) => {
                self.next();
                true
            }
            Some(SwipeDirection::Previous) => {
                self.previous();
                true
            }
            None => false,
        }
    }
}
