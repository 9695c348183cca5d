use crate::store::{Store, SubscriptionId};

/// Initial value of the counter store's name.
pub const DEFAULT_NAME: &str = "depression";

/// Snapshot of the counter store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    pub count: u64,
    pub name: String,
}

/// An incrementing counter with a free-form name beside it.
///
/// The count only ever goes up by one; the name is assigned directly.
///
/// # Examples
///
/// ```
/// use scatterscope::state::CounterStore;
///
/// let counter = CounterStore::new();
/// counter.increment();
/// counter.increment();
///
/// assert_eq!(counter.count(), 2);
/// assert_eq!(counter.name(), "depression");
/// ```
#[derive(Clone, Debug)]
pub struct CounterStore {
    inner: Store<CounterState>,
}

impl CounterStore {
    pub const ID: &'static str = "counter";

    pub fn new() -> Self {
        Self::with_name(DEFAULT_NAME)
    }

    /// A counter at zero with a different starting name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            inner: Store::new(
                Self::ID,
                CounterState {
                    count: 0,
                    name: name.into(),
                },
            ),
        }
    }

    pub fn increment(&self) {
        self.inner.update(|state| state.count += 1);
    }

    pub fn count(&self) -> u64 {
        self.inner.read(|state| state.count)
    }

    pub fn name(&self) -> String {
        self.inner.read(|state| state.name.clone())
    }

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.inner.update(move |state| state.name = name);
    }

    pub fn snapshot(&self) -> CounterState {
        self.inner.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CounterState) + Send + Sync + 'static,
    {
        self.inner.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn fresh_store_defaults() {
        let counter = CounterStore::new();
        assert_eq!(
            counter.snapshot(),
            CounterState {
                count: 0,
                name: "depression".to_string(),
            }
        );
    }

    #[test]
    fn increment_adds_one_each_call() {
        let counter = CounterStore::new();
        for expected in 1..=5 {
            counter.increment();
            assert_eq!(counter.count(), expected);
        }
    }

    #[test]
    fn name_is_directly_assignable() {
        let counter = CounterStore::with_name("anxiety");
        assert_eq!(counter.name(), "anxiety");

        counter.set_name("");
        assert_eq!(counter.name(), "");
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn shared_between_holders() {
        let counter = CounterStore::new();
        let other = counter.clone();

        other.increment();
        counter.increment();

        assert_eq!(other.count(), 2);
    }

    #[test]
    fn subscribers_see_each_increment() {
        let counter = CounterStore::new();
        let history = Arc::new(Mutex::new(Vec::new()));
        let history_clone = history.clone();

        counter.subscribe(move |state| history_clone.lock().unwrap().push(state.count));
        counter.increment();
        counter.increment();
        counter.set_name("insomnia");

        assert_eq!(*history.lock().unwrap(), vec![1, 2, 2]);
    }
}
