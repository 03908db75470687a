//! Cooperative single-threaded scheduler on a virtual clock.
//!
//! Tasks carry a small payload instead of a callback: the owner drains due
//! tasks with [`Scheduler::pop_due`] and dispatches on the payload itself.
//! This keeps all mutation inside the owner's `&mut self` and makes every
//! task cancellable through its [`TaskHandle`].
//!
//! ```ignore
//! let mut scheduler = Scheduler::new();
//! let tick = scheduler.schedule_repeating(Duration::from_millis(30), Timer::Tick);
//!
//! while let Some((handle, timer)) = scheduler.pop_due(target) {
//!     // dispatch on `timer`, cancel `handle` when the phase ends
//! }
//! scheduler.settle(target);
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies a scheduled task. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Task<T> {
    due: Duration,
    period: Option<Duration>,
    payload: T,
}

/// Virtual-clock scheduler holding one-shot and repeating tasks.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<TaskHandle, Task<T>>,
}

impl<T: Copy> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `payload` once, `delay` after now.
    pub fn schedule_once(&mut self, delay: Duration, payload: T) -> TaskHandle {
        self.insert(delay, None, payload)
    }

    /// Run `payload` every `period`, first at now + `period`.
    ///
    /// A zero period is clamped to one millisecond so draining always
    /// terminates.
    pub fn schedule_repeating(&mut self, period: Duration, payload: T) -> TaskHandle {
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Some(period), payload)
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.insert(
            handle,
            Task {
                due: self.now.saturating_add(delay),
                period,
                payload,
            },
        );
        handle
    }

    /// Cancel a task. Returns `false` if it already ran (one-shot) or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle).is_some()
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_active(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.values().map(|task| task.due).min()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its deadline. Ties go to the task created first. Repeating tasks are
    /// re-armed one period later and stay pending.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskHandle, T)> {
        let (handle, due) = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(handle, task)| (task.due, **handle))
            .map(|(handle, task)| (*handle, task.due))?;

        self.now = self.now.max(due);

        let task = self.tasks.get_mut(&handle)?;
        let payload = task.payload;
        match task.period {
            Some(period) => task.due = due.saturating_add(period),
            None => {
                self.tasks.remove(&handle);
            }
        }
        Some((handle, payload))
    }

    /// Move the clock forward to `until` once everything due has been
    /// drained. The clock never moves backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
