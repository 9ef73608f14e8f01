use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Host hook that keeps the newest table content in view
pub trait ScrollTarget: Send + Sync {
    fn scroll_to_end(&self);
}

/// For hosts that re-render the whole page and have nothing to scroll
#[derive(Debug, Default)]
pub struct NoScroll;

impl ScrollTarget for NoScroll {
    fn scroll_to_end(&self) {}
}

/// Counts scroll requests; clones share the same counter
#[derive(Debug, Clone, Default)]
pub struct ScrollCounter {
    requests: Arc<AtomicUsize>,
}

impl ScrollCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ScrollTarget for ScrollCounter {
    fn scroll_to_end(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}
