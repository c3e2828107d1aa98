use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{Scheduler, Task};
use crate::time::{self, Instant};
use crate::util::result::ResultExtension;

/// A [`Scheduler`] which runs each task on its own background thread, once the monotonic clock has
/// passed the task's deadline.
///
/// Tasks are fire-and-forget: a task that panics only takes its own thread down with it. The
/// scheduler keeps the handle of each thread so that [`wait_idle`](ThreadScheduler::wait_idle) can
/// wait for outstanding tasks, but dropping the scheduler doesn't cancel or wait for anything.
/// Threads that have finished are joined whenever another task is scheduled, so only the handles
/// of outstanding tasks are kept.
#[derive(Debug, Default)]
pub struct ThreadScheduler {
    name: Option<String>,
    workers: Mutex<Workers>,
}

#[derive(Debug, Default)]
struct Workers {
    handles: Vec<JoinHandle<()>>,
    // Tasks which panicked after being joined early, not yet reported by wait_idle.
    panicked: usize,
}

impl Workers {
    /// Joins every thread that has already finished, without blocking.
    fn reap(&mut self) {
        let (finished, running): (Vec<_>, Vec<_>) = mem::take(&mut self.handles)
            .into_iter()
            .partition(|handle| handle.is_finished());
        self.handles = running;
        self.panicked += count_panicked(finished);
    }
}

fn count_panicked(handles: Vec<JoinHandle<()>>) -> usize {
    handles
        .into_iter()
        .map(JoinHandle::join)
        .filter(Result::is_err)
        .count()
}

impl ThreadScheduler {
    /// Creates a new scheduler with no outstanding tasks.
    pub fn new() -> ThreadScheduler {
        ThreadScheduler::default()
    }

    /// Sets the name given to every thread spawned by this scheduler, which shows up in panic
    /// messages and debuggers.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> ThreadScheduler {
        self.name = Some(name.into());
        self
    }

    /// Returns the number of tasks whose threads haven't finished yet.
    pub fn pending(&self) -> usize {
        let mut workers = self.lock_workers();
        workers.reap();
        workers.handles.len()
    }

    /// Blocks until every task scheduled so far, and any task they schedule in turn, has run.
    /// Returns the number of tasks which panicked since the last call.
    pub fn wait_idle(&self) -> usize {
        loop {
            // The lock isn't held while joining, so running tasks can schedule more.
            let handles = mem::take(&mut self.lock_workers().handles);
            if handles.is_empty() {
                return mem::take(&mut self.lock_workers().panicked);
            }
            let panicked = count_panicked(handles);
            self.lock_workers().panicked += panicked;
        }
    }

    fn lock_workers(&self) -> MutexGuard<'_, Workers> {
        // The handles stay valid even if another thread panicked while holding the lock.
        self.workers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ThreadScheduler {
    /// # Panics
    /// Panics if the system refuses to spawn another thread. The spawned thread panics if `wait`
    /// is too long to be represented by the system clock.
    fn schedule(&self, wait: Duration, task: Task) {
        let deadline = Instant::now() + wait;

        let mut builder = thread::Builder::new();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }

        tracing::debug!(?wait, "scheduled delayed task on background thread");
        let handle = builder
            .spawn(move || {
                time::sleep_until(deadline).throw();
                tracing::debug!("running delayed task");
                task();
            })
            .throw();

        let mut workers = self.lock_workers();
        workers.reap();
        workers.handles.push(handle);
    }
}
