// SPDX-License-Identifier: MPL-2.0
//! Observers notified before each dialog is shown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::dialog::{ButtonSet, DialogIcon};

/// What is about to be shown, as passed to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageShowing {
    pub title: String,
    pub text: String,
    pub buttons: ButtonSet,
    pub icon: DialogIcon,
}

/// Identifies a subscription for [`NotificationService::unsubscribe`].
///
/// [`NotificationService::unsubscribe`]: super::NotificationService::unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(&MessageShowing) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    callbacks: RwLock<Vec<(SubscriptionId, Callback)>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        match self.callbacks.write() {
            Ok(mut callbacks) => callbacks.push((id, callback)),
            Err(poisoned) => poisoned.into_inner().push((id, callback)),
        }
        id
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = match self.callbacks.write() {
            Ok(callbacks) => callbacks,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = callbacks.len();
        callbacks.retain(|(existing, _)| *existing != id);
        callbacks.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Calls every subscriber in subscription order.
    ///
    /// Callbacks run on a snapshot, outside the lock, so they may subscribe,
    /// unsubscribe, or show notifications themselves.
    pub(crate) fn notify(&self, event: &MessageShowing) {
        let snapshot: Vec<Callback> = match self.callbacks.read() {
            Ok(callbacks) => callbacks.iter().map(|(_, cb)| Arc::clone(cb)).collect(),
            Err(poisoned) => poisoned
                .into_inner()
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect(),
        };
        for callback in snapshot {
            callback(event);
        }
    }
}
