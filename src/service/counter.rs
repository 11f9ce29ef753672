// SPDX-License-Identifier: MPL-2.0
//! Count of notifications currently on screen.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared, lock-free count of active notifications.
#[derive(Debug, Default)]
pub(crate) struct ActiveCount(AtomicUsize);

impl ActiveCount {
    pub(crate) fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub(crate) fn increment(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Decrements the count, clamping at zero.
    ///
    /// Only an unpaired external decrement can hit zero here.
    pub(crate) fn decrement(&self) {
        let result = self
            .0
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if result.is_err() {
            tracing::warn!(
                "notification count decremented below zero; unpaired external decrement"
            );
        }
    }
}

/// Holds one unit of the active-notification count; releases it on drop.
///
/// Dropping happens on every exit path, including `?` returns and panics.
#[derive(Debug)]
#[must_use = "the count is released as soon as the guard is dropped"]
pub struct MessageCountGuard {
    count: Arc<ActiveCount>,
}

impl MessageCountGuard {
    pub(crate) fn new(count: &Arc<ActiveCount>) -> Self {
        count.increment();
        Self {
            count: Arc::clone(count),
        }
    }
}

impl Drop for MessageCountGuard {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn guard_increments_and_releases() {
        let count = Arc::new(ActiveCount::default());
        {
            let _outer = MessageCountGuard::new(&count);
            let _inner = MessageCountGuard::new(&count);
            assert_eq!(count.get(), 2);
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn guard_releases_during_unwind() {
        let count = Arc::new(ActiveCount::default());
        let inner = Arc::clone(&count);

        let result = panic::catch_unwind(move || {
            let _guard = MessageCountGuard::new(&inner);
            panic!("dialog exploded");
        });

        assert!(result.is_err());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn decrement_at_zero_is_clamped() {
        let count = ActiveCount::default();
        count.decrement();
        assert_eq!(count.get(), 0);

        count.increment();
        assert_eq!(count.get(), 1);
    }
}
