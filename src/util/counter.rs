use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A shared counter for observing how many times a function has been called. Clones share the same
/// count, so one clone can be moved into a closure while another is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> CallCounter {
        CallCounter::default()
    }

    /// Records a call and returns the number of calls before this one.
    pub fn hit(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
