use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// A unit of deferred work, handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something which can run a [`Task`] once, no earlier than a given amount of time from now.
///
/// Schedulers don't block the caller, don't offer cancellation and don't guarantee any ordering
/// between tasks other than that each task runs after its wait has elapsed.
pub trait Scheduler {
    /// Arranges for `task` to be run once, after at least `wait` has elapsed.
    fn schedule(&self, wait: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, wait: Duration, task: Task) {
        (**self).schedule(wait, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, wait: Duration, task: Task) {
        (**self).schedule(wait, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule(&self, wait: Duration, task: Task) {
        (**self).schedule(wait, task)
    }
}

/// Calls `func` with `args` once `wait` has elapsed, using `scheduler` to do the waiting. Returns
/// immediately.
///
/// Multiple arguments can be passed as a tuple. Whatever `func` returns is discarded, and a panic
/// inside `func` is the scheduler's to deal with.
pub fn delay<S, F, A, R>(scheduler: &S, func: F, wait: Duration, args: A)
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    scheduler.schedule(
        wait,
        Box::new(move || {
            func(args);
        }),
    );
}

/// A [`Scheduler`] driven by a virtual clock, which only moves when [`advance`] is called.
///
/// Tasks run on the thread that calls [`advance`], in order of their due time, with ties broken by
/// the order they were scheduled in. A task may schedule further tasks, which will run during the
/// same call to [`advance`] if they fall due in time.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ManualState>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    // Keyed by due time, then scheduling order.
    timers: BTreeMap<(Duration, u64), Task>,
}

impl ManualScheduler {
    /// Creates a new scheduler with its clock at zero and no pending tasks.
    pub fn new() -> ManualScheduler {
        ManualScheduler::default()
    }

    /// Returns the time on the virtual clock, relative to when the scheduler was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Returns the number of tasks that haven't run yet.
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves the virtual clock forward by `by`, running every task that falls due on the way.
    /// Returns the number of tasks that were run.
    ///
    /// The clock saturates at [`Duration::MAX`], as do the due times of scheduled tasks.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        let mut ran = 0;

        loop {
            // The borrow has to end before the task runs, in case it schedules another.
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state.timers.first_key_value().map(|(&(due, _), _)| due);
                match due {
                    Some(due) if due <= target => {
                        state.now = due;
                        state.timers.pop_first()
                    },
                    _ => None,
                }
            };

            match next {
                Some(((due, seq), task)) => {
                    tracing::debug!(?due, seq, "running delayed task");
                    task();
                    ran += 1;
                },
                None => break,
            }
        }

        self.state.borrow_mut().now = target;
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, wait: Duration, task: Task) {
        let mut state = self.state.borrow_mut();
        let due = state.now.saturating_add(wait);
        let seq = state.next_seq;
        state.next_seq += 1;
        tracing::debug!(?due, seq, "scheduled delayed task");
        state.timers.insert((due, seq), task);
    }
}

impl Debug for ManualScheduler {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}
