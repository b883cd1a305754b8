// crates/mindgaps-core/src/timer.rs
// Timer abstraction shared by the browser and the virtual test clock

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Source of repeating and one-shot timers.
///
/// Dropping a returned handle cancels its timer. A cancelled timer never
/// fires, even if it was already due.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn interval(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Holds at most one live timer.
///
/// Arming replaces the previous handle in the same mutation, so two timers
/// can never be active through one slot.
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TimerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handle`, cancelling whatever was armed before
    pub fn arm(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    /// Cancel the armed timer. Returns false if nothing was armed.
    pub fn disarm(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn take(&mut self) -> Option<H> {
        self.handle.take()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

// ============================================================================
// Virtual clock
// ============================================================================

enum Task {
    Repeat(Box<dyn FnMut()>),
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    due: Duration,
    period: Option<Duration>,
    // None while the callback is running
    task: Option<Task>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, Entry>,
}

impl Clock {
    fn insert(&mut self, due: Duration, period: Option<Duration>, task: Task) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.insert(id, Entry { due, period, task: Some(task) });
        id
    }

    /// Earliest runnable timer due at or before `limit`
    fn next_due(&self, limit: Duration) -> Option<(u64, Duration)> {
        self.timers
            .iter()
            .filter(|(_, entry)| entry.task.is_some() && entry.due <= limit)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, entry)| (*id, entry.due))
    }
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// No borrow of the clock is held while a callback runs, so callbacks may
/// freely create and cancel timers.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Handle returned by [`ManualScheduler`]; cancels on drop
pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            // Dropped after the borrow ends; the callback may own other timers
            let removed = clock.borrow_mut().timers.remove(&self.id);
            drop(removed);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of timers that have not fired (one-shot) or been cancelled
    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move time forward by `by`, firing every timer that comes due
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;

        loop {
            let (id, task) = {
                let mut clock = self.clock.borrow_mut();
                let Some((id, due)) = clock.next_due(target) else {
                    break;
                };
                clock.now = due;

                let entry = clock.timers.get_mut(&id);
                let task = entry.and_then(|e| e.task.take());
                if matches!(task, Some(Task::Once(_))) {
                    clock.timers.remove(&id);
                }
                (id, task)
            };

            match task {
                Some(Task::Once(fire)) => fire(),
                Some(Task::Repeat(mut tick)) => {
                    tick();
                    // Put the callback back unless the tick cancelled its own timer
                    let mut clock = self.clock.borrow_mut();
                    if let Some(entry) = clock.timers.get_mut(&id) {
                        entry.due += entry.period.unwrap_or(Duration::ZERO);
                        entry.task = Some(Task::Repeat(tick));
                    }
                }
                None => {}
            }
        }

        self.clock.borrow_mut().now = target;
    }

    fn handle(&self, id: u64) -> ManualTimer {
        ManualTimer {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn interval(&self, period: Duration, tick: Box<dyn FnMut()>) -> ManualTimer {
        // A zero period would spin forever inside one advance()
        let period = period.max(Duration::from_millis(1));
        let id = {
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + period;
            clock.insert(due, Some(period), Task::Repeat(tick))
        };
        self.handle(id)
    }

    fn timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> ManualTimer {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + delay;
            clock.insert(due, None, Task::Once(fire))
        };
        self.handle(id)
    }
}
