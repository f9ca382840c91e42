use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    interests_registered: AtomicU64,
    interests_withdrawn: AtomicU64,
    rollbacks: AtomicU64,
    store_failures: AtomicU64,
}

impl Metrics {
    pub fn record_registered(&self) {
        self.interests_registered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_withdrawn(&self) {
        self.interests_withdrawn.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rollback(&self) {
        self.rollbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            interests_registered: self.interests_registered.load(Ordering::Relaxed),
            interests_withdrawn: self.interests_withdrawn.load(Ordering::Relaxed),
            rollbacks: self.rollbacks.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub interests_registered: u64,
    pub interests_withdrawn: u64,
    pub rollbacks: u64,
    pub store_failures: u64,
}
