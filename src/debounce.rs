// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke debouncing over a pluggable timer.
//!
//! Each `schedule` cancels whatever was pending and starts a fresh countdown,
//! so a burst of keystrokes collapses into a single evaluation of the last
//! one. Intermediate values are simply never evaluated: last query wins.
//!
//! The timer is a trait so the same `Debouncer` runs on `setTimeout` in the
//! browser and on a virtual clock in tests (`testing::ManualTimer`).

use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// One-shot cancellable timers.
pub trait Timer {
    type Handle;

    /// Run `task` once after `delay`. `None` if the host refused to schedule it.
    fn start(&self, delay: Duration, task: Task) -> Option<Self::Handle>;

    /// Cancel a pending task. Cancelling one that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Collapses rapid calls into one delayed call.
pub struct Debouncer<T: Timer> {
    timer: T,
    delay: Duration,
    pending: Option<T::Handle>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self {
            timer,
            delay,
            pending: None,
        }
    }

    /// Replace any pending task with `task`, restarting the countdown.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = self.timer.start(self.delay, Box::new(task));
    }

    /// Drop the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}

impl<T: Timer> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualTimer;
    use std::cell::RefCell;
    use std::rc::Rc;

    const WINDOW: Duration = Duration::from_millis(300);

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, ManualTimer) {
        (Rc::new(RefCell::new(Vec::new())), ManualTimer::new())
    }

    #[test]
    fn burst_collapses_to_last_call() {
        let (calls, timer) = recorder();
        let mut debouncer = Debouncer::new(timer.clone(), WINDOW);

        for value in ["p", "pi", "piz"] {
            let calls = Rc::clone(&calls);
            debouncer.schedule(move || calls.borrow_mut().push(value));
            timer.advance(Duration::from_millis(100));
        }
        assert!(calls.borrow().is_empty());

        timer.advance(WINDOW);
        assert_eq!(*calls.borrow(), ["piz"]);
        assert_eq!(timer.fired(), 1);
    }

    #[test]
    fn spaced_calls_each_fire() {
        let (calls, timer) = recorder();
        let mut debouncer = Debouncer::new(timer.clone(), WINDOW);

        for value in ["a", "b"] {
            let calls = Rc::clone(&calls);
            debouncer.schedule(move || calls.borrow_mut().push(value));
            timer.advance(WINDOW);
        }
        assert_eq!(*calls.borrow(), ["a", "b"]);
    }

    #[test]
    fn fires_exactly_at_the_window() {
        let (calls, timer) = recorder();
        let mut debouncer = Debouncer::new(timer.clone(), WINDOW);
        let sink = Rc::clone(&calls);
        debouncer.schedule(move || sink.borrow_mut().push("x"));

        timer.advance(Duration::from_millis(299));
        assert!(calls.borrow().is_empty());
        timer.advance(Duration::from_millis(1));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn cancel_and_drop_clear_pending() {
        let (calls, timer) = recorder();
        let mut debouncer = Debouncer::new(timer.clone(), WINDOW);
        let sink = Rc::clone(&calls);
        debouncer.schedule(move || sink.borrow_mut().push("cancelled"));
        debouncer.cancel();
        assert_eq!(timer.pending(), 0);

        let sink = Rc::clone(&calls);
        debouncer.schedule(move || sink.borrow_mut().push("dropped"));
        drop(debouncer);
        timer.advance(WINDOW);
        assert!(calls.borrow().is_empty());
    }
}
