use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// A shared, named state container.
///
/// Every clone of a store points at the same state, so a store created once
/// at startup can be handed to any number of views. Mutations are visible to
/// every holder immediately and subscribers are told about each one.
///
/// # Examples
///
/// ```
/// use scatterscope::store::Store;
///
/// let store = Store::new("counter", 0u64);
/// let view = store.clone();
///
/// store.update(|n| *n += 1);
/// assert_eq!(view.get(), 1);
/// ```
pub struct Store<T> {
    id: &'static str,
    state: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<Vec<(SubscriptionId, Subscriber<T>)>>>,
    next_subscription: Arc<AtomicUsize>,
}

impl<T> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(id: &'static str, initial: T) -> Self {
        Self {
            id,
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_subscription: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The store's name, used in log events.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Replace the whole state.
    pub fn set(&self, new_state: T) {
        *self.write() = new_state;
        tracing::debug!(store = self.id, "state replaced");
        self.notify();
    }

    /// Update the state in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut *self.write());
        tracing::debug!(store = self.id, "state updated");
        self.notify();
    }

    /// Read state through a borrow, without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&*self.read_guard())
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs after every `set` or `update`, once the write has
    /// completed, and receives the new state. It must not touch this same
    /// store; it already holds the state borrowed.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        let callback: Subscriber<T> = Arc::new(callback);
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, callback));
        id
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(sub, _)| *sub != id);
        subscribers.len() != before
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self) {
        // Snapshot the list so a callback may subscribe or unsubscribe.
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        if subscribers.is_empty() {
            return;
        }
        let state = self.read_guard();
        for subscriber in &subscribers {
            subscriber(&*state);
        }
    }

    // Every mutation is a single assignment, so a poisoned lock still holds
    // a consistent value.
    fn read_guard(&self) -> RwLockReadGuard<'_, T> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Store<T> {
    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.read_guard().clone()
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            next_subscription: Arc::clone(&self.next_subscription),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("id", &self.id)
            .field("state", &*self.read_guard())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{Props, RouteMatch, ViewKind};
    use crate::state::Record;
    use serde_json::json;
    use std::sync::Mutex;

    fn home() -> RouteMatch {
        RouteMatch {
            name: "Home".to_string(),
            view: ViewKind::Overview,
            path: "/".to_string(),
            props: Props::new(),
        }
    }

    fn detail(genre: &str) -> RouteMatch {
        RouteMatch {
            name: "DetailPlot".to_string(),
            view: ViewKind::Detail,
            path: format!("/details/{genre}"),
            props: [("genre", genre)].into_iter().collect(),
        }
    }

    #[test]
    fn route_store_replaced_whole() {
        let store = Store::new("route", home());
        assert_eq!(store.get().view, ViewKind::Overview);

        store.set(detail("jazz"));

        let current = store.get();
        assert_eq!(current.view, ViewKind::Detail);
        assert_eq!(current.props.get("genre"), Some("jazz"));
    }

    #[test]
    fn record_store_updated_in_place() {
        let store: Store<Vec<Record>> = Store::new("records", vec![json!({"genre": "jazz"})]);

        store.update(|records| records.push(json!({"genre": "soul"})));

        let genres = store.read(|records| {
            records
                .iter()
                .filter_map(|r| r["genre"].as_str().map(str::to_string))
                .collect::<Vec<_>>()
        });
        assert_eq!(genres, vec!["jazz", "soul"]);
    }

    #[test]
    fn clones_share_records() {
        let store: Store<Vec<Record>> = Store::new("records", Vec::new());
        let view = store.clone();

        view.set(vec![json!(1), json!(2)]);

        assert_eq!(store.read(Vec::len), 2);
        assert_eq!(store.id(), "records");
    }

    #[test]
    fn route_subscribers_see_each_navigation() {
        let store = Store::new("route", home());
        let paths = Arc::new(Mutex::new(Vec::new()));
        let paths_clone = paths.clone();

        store.subscribe(move |route: &RouteMatch| {
            paths_clone.lock().unwrap().push(route.path.clone());
        });
        assert!(paths.lock().unwrap().is_empty());

        store.set(detail("blues"));
        store.update(|route| *route = home());

        assert_eq!(*paths.lock().unwrap(), vec!["/details/blues", "/"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store: Store<Vec<Record>> = Store::new("records", Vec::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let id = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.subscriber_count(), 1);

        store.set(vec![json!("a")]);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(Vec::new());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.subscriber_count(), 0);
    }
}
