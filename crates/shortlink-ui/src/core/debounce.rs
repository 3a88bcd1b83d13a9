//! Trailing-edge debounce over an owned timer slot.
//!
//! # Design
//! - A debouncer owns at most one timer handle; dropping the handle cancels it.
//! - Arming always disarms first, so pending work is replaced and never queued.
//! - Timers come from a [`Scheduler`] so the state machine runs natively in tests.

use std::cell::RefCell;
use std::rc::Rc;

/// Deferred task executed when a timer fires.
pub type Task = Box<dyn FnOnce()>;

/// Source of one-shot timers.
pub trait Scheduler {
    /// Handle for a scheduled timer. Dropping it must cancel the timer.
    type Handle;

    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

/// Observable debounce phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebouncePhase {
    /// No timer is armed.
    Idle,
    /// A timer is armed and its task has not run yet.
    Pending,
}

/// Single-slot debouncer.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    slot: Rc<RefCell<Option<S::Handle>>>,
}

impl<S> Debouncer<S>
where
    S: Scheduler,
    S::Handle: 'static,
{
    /// Create an idle debouncer with a fixed quiet period.
    #[must_use]
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Current phase of the slot.
    #[must_use]
    pub fn phase(&self) -> DebouncePhase {
        if self.slot.borrow().is_some() {
            DebouncePhase::Pending
        } else {
            DebouncePhase::Idle
        }
    }

    /// Arm the timer, replacing any pending task.
    pub fn arm<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.disarm();
        let slot = Rc::downgrade(&self.slot);
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                // Release the slot before running the task; the task may re-arm.
                if let Some(slot) = slot.upgrade() {
                    let fired = slot.borrow_mut().take();
                    drop(fired);
                }
                task();
            }),
        );
        *self.slot.borrow_mut() = Some(handle);
    }

    /// Cancel the pending task. Returns `true` when a task was pending.
    pub fn disarm(&mut self) -> bool {
        let pending = self.slot.borrow_mut().take();
        pending.is_some()
    }
}

impl<S: Scheduler> Drop for Debouncer<S> {
    fn drop(&mut self) {
        let pending = self.slot.borrow_mut().take();
        drop(pending);
    }
}

/// Browser timers backed by `setTimeout`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}
