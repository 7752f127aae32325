//! Recurring tasks on a single-threaded virtual clock.
//!
//! The app loop owns one [`Scheduler`] and calls [`Scheduler::advance_to`]
//! with the wall-clock time since start. Due callbacks run inline, in timer
//! order; nothing blocks and nothing is awaited. Each task is paired with a
//! [`TaskHandle`] that cancels it when dropped, so a component that owns its
//! handle can never be ticked after it is gone.

use std::{cell::Cell, fmt, rc::Rc, time::Duration};

use crate::{EngineError, EngineResult};

/// Identifies a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

struct Task {
    id: TaskId,
    period: Duration,
    next_due: Duration,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnMut()>,
}

/// Count of ticks a component has applied to its state.
///
/// Clones share the count, so a clone taken before unmount keeps reporting
/// after the component is gone.
#[derive(Debug, Clone, Default)]
pub struct TickCounter(Rc<Cell<u64>>);

impl TickCounter {
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    pub(crate) fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Cancellation handle for a recurring task. Cancels on drop.
#[derive(Debug)]
#[must_use = "dropping a TaskHandle cancels its task"]
pub struct TaskHandle {
    id: TaskId,
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Stop the task. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            tracing::trace!(task = self.id.0, "task cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Single-threaded scheduler of fixed-period callbacks.
#[derive(Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    tasks: Vec<Task>,
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl Scheduler {
    /// Create a scheduler with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `callback` every `period`, first at `now + period`.
    pub fn every(
        &mut self,
        period: Duration,
        callback: impl FnMut() + 'static,
    ) -> EngineResult<TaskHandle> {
        if period.is_zero() {
            return Err(EngineError::NonPositiveDuration { what: "task period" });
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        let cancelled = Rc::new(Cell::new(false));

        self.tasks.push(Task {
            id,
            period,
            next_due: self.now + period,
            cancelled: cancelled.clone(),
            callback: Box::new(callback),
        });
        tracing::trace!(task = id.0, period_ms = period.as_millis() as u64, "task scheduled");

        Ok(TaskHandle { id, cancelled })
    }

    /// Number of tasks that have not been cancelled.
    pub fn live_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| !t.cancelled.get()).count()
    }

    /// Earliest due time among live tasks.
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .filter(|t| !t.cancelled.get())
            .map(|t| t.next_due)
            .min()
    }

    /// Advance the clock by `delta`. See [`Scheduler::advance_to`].
    pub fn advance_by(&mut self, delta: Duration) -> usize {
        self.advance_to(self.now + delta)
    }

    /// Advance the clock to `target`, firing every occurrence that falls due.
    ///
    /// Occurrences run in due-time order; ties go to the older task. A task
    /// cancelled by an earlier callback in the same advance does not run.
    /// Returns the number of callbacks run. Time never moves backwards.
    pub fn advance_to(&mut self, target: Duration) -> usize {
        if target < self.now {
            return 0;
        }
        self.prune();

        let mut fired = 0;
        loop {
            let next = self
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| !t.cancelled.get() && t.next_due <= target)
                .min_by_key(|(_, t)| (t.next_due, t.id))
                .map(|(i, _)| i);
            let Some(i) = next else { break };

            let task = &mut self.tasks[i];
            self.now = task.next_due;
            task.next_due += task.period;
            (task.callback)();
            fired += 1;
        }

        self.now = target;
        self.prune();
        fired
    }

    /// Run a task's callback immediately, even if it was cancelled.
    ///
    /// Cancelled tasks are only dropped on the next advance, so this can
    /// reach a callback whose owner is already gone. Returns `false` if no
    /// such task is held.
    pub fn force_fire(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                (task.callback)();
                true
            }
            None => false,
        }
    }

    fn prune(&mut self) {
        self.tasks.retain(|t| !t.cancelled.get());
    }
}
