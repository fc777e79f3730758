//! Observable settings store.
//!
//! Holds the single current [`Settings`] value and notifies subscribers on
//! every mutation. Notifications are never deduplicated and never replayed
//! on subscribe.

use std::collections::{BTreeMap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::settings::types::Settings;

type Callback = Box<dyn Fn(&Settings) + Send + Sync>;

struct Observer {
    active: Arc<AtomicBool>,
    callback: Callback,
}

/// A value waiting to be delivered, paired with the observers that were
/// registered when it was produced.
struct Delivery {
    value: Settings,
    targets: Vec<Arc<Observer>>,
}

struct StoreInner {
    current: Settings,
    observers: BTreeMap<u64, Arc<Observer>>,
    next_id: u64,
    pending: VecDeque<Delivery>,
    /// True while some caller is draining `pending`.
    delivering: bool,
}

/// Thread-safe store owning the session's settings.
///
/// Writes are serialised under one lock, so concurrent `set_*` calls never
/// lose updates. Delivery is serialised too: when a mutation happens while
/// another caller is still notifying observers (another thread, or an
/// observer calling a setter), the new value is queued and delivered by
/// that caller once the in-flight value has reached every observer.
///
/// A panicking observer does not cost the others their notification: the
/// value still reaches every remaining observer, then the first panic is
/// resumed on the caller of the setter. Values queued behind it are
/// delivered by the next mutation.
///
/// Observers that need to write back should capture a [`WeakSettingsStore`]
/// rather than a clone. A captured clone keeps the store alive until the
/// subscription is dropped.
#[derive(Clone)]
pub struct SettingsStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl SettingsStore {
    /// Create a store holding `Settings::default()`.
    pub fn new() -> Self {
        Self::with_initial(Settings::default())
    }

    pub fn with_initial(initial: Settings) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                current: initial,
                observers: BTreeMap::new(),
                next_id: 0,
                pending: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    /// Get a clone of the current settings.
    pub fn current(&self) -> Settings {
        self.inner.lock().current.clone()
    }

    /// Register `callback` for every future mutation.
    ///
    /// The current value is not replayed. Dropping the returned
    /// [`Subscription`] stops delivery to this callback.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Settings) + Send + Sync + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let observer = Arc::new(Observer {
            active: Arc::clone(&active),
            callback: Box::new(callback),
        });

        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.insert(id, observer);
        tracing::trace!(subscriber = id, total = inner.observers.len(), "Subscribed");

        Subscription {
            id,
            active,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// A handle that does not keep the store alive.
    pub fn downgrade(&self) -> WeakSettingsStore {
        WeakSettingsStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().observers.len()
    }

    /// Replace the count, keeping the description. Always notifies.
    pub fn set_count(&self, new_count: i64) {
        tracing::debug!(count = new_count, "Count updated");
        self.replace(|current| current.with_count(new_count));
    }

    /// Replace the description, keeping the count. Always notifies.
    pub fn set_description(&self, new_description: impl Into<String>) {
        let new_description = new_description.into();
        tracing::debug!(description = %new_description, "Description updated");
        self.replace(move |current| current.with_description(new_description));
    }

    fn replace(&self, update: impl FnOnce(&Settings) -> Settings) {
        {
            let mut inner = self.inner.lock();
            let next = update(&inner.current);
            inner.current = next.clone();
            let targets = inner.observers.values().cloned().collect();
            inner.pending.push_back(Delivery {
                value: next,
                targets,
            });
            if inner.delivering {
                return;
            }
            inner.delivering = true;
        }
        self.drain();
    }

    fn drain(&self) {
        // A panicking observer must not leave the store stuck in delivery.
        // Undelivered values stay queued for the next drain.
        let _reset = scopeguard::guard_on_unwind(&self.inner, |inner| {
            inner.lock().delivering = false;
        });

        loop {
            let delivery = {
                let mut inner = self.inner.lock();
                match inner.pending.pop_front() {
                    Some(delivery) => delivery,
                    None => {
                        inner.delivering = false;
                        return;
                    }
                }
            };

            let mut failure = None;
            for observer in &delivery.targets {
                if !observer.active.load(Ordering::SeqCst) {
                    continue;
                }
                let result =
                    panic::catch_unwind(AssertUnwindSafe(|| (observer.callback)(&delivery.value)));
                if let Err(payload) = result {
                    tracing::error!("Settings observer panicked");
                    if failure.is_none() {
                        failure = Some(payload);
                    }
                }
            }
            if let Some(payload) = failure {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning handle to a [`SettingsStore`], for use inside observers.
#[derive(Clone)]
pub struct WeakSettingsStore {
    inner: Weak<Mutex<StoreInner>>,
}

impl WeakSettingsStore {
    /// The store, if it is still alive.
    pub fn upgrade(&self) -> Option<SettingsStore> {
        self.inner.upgrade().map(|inner| SettingsStore { inner })
    }
}

/// Handle for a registered observer.
///
/// Releasing it (drop or [`Subscription::unsubscribe`]) guarantees that no
/// callback invocation starts afterwards.
#[must_use = "dropping a Subscription immediately stops notifications"]
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    store: Weak<Mutex<StoreInner>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn release(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        let Some(store) = self.store.upgrade() else {
            return;
        };
        // The observer is dropped after the lock is released: its callback
        // may own other subscriptions on this store.
        let removed = {
            let mut inner = store.lock();
            let removed = inner.observers.remove(&self.id);
            tracing::trace!(subscriber = self.id, total = inner.observers.len(), "Unsubscribed");
            removed
        };
        drop(removed);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_holds_defaults() {
        let store = SettingsStore::new();
        assert_eq!(store.current(), Settings::default());
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscribe_does_not_replay_current_value() {
        let store = SettingsStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |s| sink.lock().push(s.clone()));
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn drop_removes_observer() {
        let store = SettingsStore::new();
        let sub = store.subscribe(|_| {});
        assert_eq!(store.subscriber_count(), 1);
        drop(sub);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = SettingsStore::new();
        let sub = store.subscribe(|_| {});
        drop(store);
        assert!(sub.is_active());
        sub.unsubscribe();
    }

    #[test]
    fn reentrant_update_is_delivered_after_current_value() {
        let store = SettingsStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let writer = store.downgrade();
        let _first = store.subscribe(move |s| {
            if s.count == 2 {
                if let Some(store) = writer.upgrade() {
                    store.set_count(3);
                }
            }
        });
        let sink = Arc::clone(&seen);
        let _second = store.subscribe(move |s| sink.lock().push(s.count));

        store.set_count(2);

        assert_eq!(*seen.lock(), vec![2, 3]);
        assert_eq!(store.current().count, 3);
    }

    #[test]
    fn panicking_observer_does_not_wedge_store() {
        let store = SettingsStore::new();
        let panicking = store.subscribe(|s| {
            if s.count == 99 {
                panic!("observer failure");
            }
        });

        let writer = store.clone();
        let result = std::thread::spawn(move || writer.set_count(99)).join();
        assert!(result.is_err());
        drop(panicking);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |s| sink.lock().push(s.count));
        store.set_count(4);
        assert_eq!(*seen.lock(), vec![4]);
    }

    #[test]
    fn panicking_observer_does_not_starve_later_observers() {
        let store = SettingsStore::new();
        let _panicking = store.subscribe(|s| {
            if s.count == 7 {
                panic!("observer failure");
            }
        });
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _later = store.subscribe(move |s| sink.lock().push(s.count));

        let writer = store.clone();
        let result = std::thread::spawn(move || writer.set_count(7)).join();
        assert!(result.is_err());
        assert_eq!(*seen.lock(), vec![7]);

        store.set_count(8);
        assert_eq!(*seen.lock(), vec![7, 8]);
    }

    #[test]
    fn weak_handle_does_not_keep_store_alive() {
        let store = SettingsStore::new();
        let weak = store.downgrade();
        let _sub = store.subscribe(move |_| {
            let _ = weak.upgrade();
        });
        let handle = store.downgrade();
        drop(store);
        assert!(handle.upgrade().is_none());
    }
}
