//! Delayed, cancellable tasks keyed by the element that scheduled them.

use fxhash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Identifies a pending task: the effect that owns it and the element's binding slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub effect: &'static str,
    pub slot: usize,
}

impl TaskKey {
    #[must_use]
    pub const fn new(effect: &'static str, slot: usize) -> Self {
        Self { effect, slot }
    }
}

pub type Task = Box<dyn FnOnce() + 'static>;

/// Runs tasks after a delay on the page's event loop.
///
/// Scheduling a key that still has a pending task replaces that task, so one element
/// never has two pending tasks for the same effect.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, key: TaskKey, delay: Duration, task: Task);

    /// Drops the pending task for `key`; returns whether one existed.
    fn cancel(&self, key: TaskKey) -> bool;
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    seq: u64,
    pending: FxHashMap<TaskKey, Pending>,
}

/// Deterministic virtual clock. Nothing runs until [`ManualScheduler::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.pending.len())
            .finish()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.clock.borrow().pending.contains_key(&key)
    }

    /// Moves the clock forward by `by`, running due tasks in due-time order.
    ///
    /// Tasks scheduled by a running task also run if they fall due within the window.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.borrow().now + by;
        let mut ran = 0;

        while let Some((due, task)) = self.take_next_due(target) {
            self.clock.borrow_mut().now = due;
            task();
            ran += 1;
        }

        self.clock.borrow_mut().now = target;
        ran
    }

    fn take_next_due(&self, target: Duration) -> Option<(Duration, Task)> {
        let mut clock = self.clock.borrow_mut();
        let key = clock
            .pending
            .iter()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(key, _)| *key)?;
        clock.pending.remove(&key).map(|p| (p.due, p.task))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, key: TaskKey, delay: Duration, task: Task) {
        let mut clock = self.clock.borrow_mut();
        clock.seq += 1;
        let pending = Pending { due: clock.now + delay, seq: clock.seq, task };
        clock.pending.insert(key, pending);
    }

    fn cancel(&self, key: TaskKey) -> bool {
        self.clock.borrow_mut().pending.remove(&key).is_some()
    }
}
