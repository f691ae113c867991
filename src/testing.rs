//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication:
//! fixture builders, a virtual-clock `Timer`, and a `ResultsSurface` that
//! records what would have been written to the page.

#![doc(hidden)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::debounce::{Task, Timer};
use crate::types::{Business, SearchIndex};
use crate::visibility::Visibility;
use crate::widget::ResultsSurface;

// ============================================================================
// FIXTURES
// ============================================================================

/// Create a listing with just a title and permalink.
///
/// This is the canonical implementation used across all tests.
pub fn make_business(title: &str, permalink: &str) -> Business {
    Business::new(title, permalink)
}

/// Create a listing with categories and tags.
pub fn make_tagged_business(
    title: &str,
    permalink: &str,
    categories: &[&str],
    tags: &[&str],
) -> Business {
    Business {
        categories: Some(categories.iter().map(|s| s.to_string()).collect()),
        tags: Some(tags.iter().map(|s| s.to_string()).collect()),
        ..Business::new(title, permalink)
    }
}

/// The one-pizzeria directory used throughout the docs and tests.
pub fn joes_pizza_index() -> SearchIndex {
    SearchIndex {
        businesses: vec![make_tagged_business(
            "Joe's Pizza",
            "/b/joes-pizza",
            &["Food & Drink"],
            &["pizza", "italian", "delivery", "cash-only"],
        )],
        categories: vec!["Food & Drink".to_string(), "Home Services".to_string()],
        tags: vec!["pizza".to_string(), "plumbing".to_string()],
    }
}

// ============================================================================
// VIRTUAL CLOCK
// ============================================================================

struct Scheduled {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    queue: Vec<Scheduled>,
    fired: usize,
}

/// A `Timer` that only moves when told to.
///
/// Clones share one clock, so a test can hand a clone to a `Debouncer` and
/// keep another to drive time forward.
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<RefCell<Clock>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, running every task that comes due in order.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            // Release the borrow before running: tasks may schedule more work.
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due <= target)
                    .min_by_key(|(_, s)| (s.due, s.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let scheduled = clock.queue.remove(i);
                    clock.now = scheduled.due;
                    clock.fired += 1;
                    scheduled.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Tasks scheduled and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Tasks that actually ran.
    pub fn fired(&self) -> usize {
        self.clock.borrow().fired
    }
}

impl Timer for ManualTimer {
    type Handle = u64;

    fn start(&self, delay: Duration, task: Task) -> Option<u64> {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.queue.push(Scheduled { id, due, task });
        Some(id)
    }

    fn cancel(&self, handle: u64) {
        self.clock.borrow_mut().queue.retain(|s| s.id != handle);
    }
}

// ============================================================================
// RECORDING SURFACE
// ============================================================================

/// A `ResultsSurface` that remembers every write.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    writes: Rc<RefCell<Vec<String>>>,
    visibility: Rc<Cell<Visibility>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `set_html` so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn last_write(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }
}

impl ResultsSurface for RecordingSurface {
    fn set_html(&self, html: &str) {
        self.writes.borrow_mut().push(html.to_string());
    }

    fn set_visibility(&self, visibility: Visibility) {
        self.visibility.set(visibility);
    }
}
