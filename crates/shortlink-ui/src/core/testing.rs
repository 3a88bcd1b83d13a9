//! Virtual-clock scheduler for timer-driven tests.

use crate::core::debounce::{Scheduler, Task};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    queue: BTreeMap<(u64, u64), Task>,
}

/// Scheduler whose time only moves when a test advances it.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Timer handle that unschedules its task on drop.
pub(crate) struct ManualHandle {
    key: (u64, u64),
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            let removed = clock.borrow_mut().queue.remove(&self.key);
            drop(removed);
        }
    }
}

impl ManualScheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub(crate) fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Number of timers still waiting to fire.
    pub(crate) fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    pub(crate) fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        self.advance_to(target);
    }

    /// Run every timer due at or before `target`, in due order.
    pub(crate) fn advance_to(&self, target: u64) {
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .keys()
                    .next()
                    .copied()
                    .filter(|(at, _)| *at <= target);
                match due {
                    Some(key) => {
                        clock.now = key.0;
                        clock.queue.remove(&key)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        let mut clock = self.clock.borrow_mut();
        clock.now = clock.now.max(target);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle {
        let mut clock = self.clock.borrow_mut();
        let key = (clock.now + u64::from(delay_ms), clock.next_id);
        clock.next_id += 1;
        clock.queue.insert(key, task);
        ManualHandle {
            key,
            clock: Rc::downgrade(&self.clock),
        }
    }
}
