use crate::store::{Store, SubscriptionId};

/// Default element type of the detail collection.
///
/// Records carry no fixed schema; any JSON value is accepted.
pub type Record = serde_json::Value;

/// The subset of records currently shown by the detail view.
///
/// Starts empty and is only ever replaced as a whole.
///
/// # Examples
///
/// ```
/// use scatterscope::state::DetailDataStore;
/// use serde_json::json;
///
/// let store = DetailDataStore::new();
/// assert!(store.is_empty());
///
/// store.set_detail_data(vec![json!({"genre": "jazz", "bpm": 120})]);
/// assert_eq!(store.len(), 1);
/// ```
pub struct DetailDataStore<R = Record> {
    inner: Store<Vec<R>>,
}

impl<R> DetailDataStore<R> {
    pub const ID: &'static str = "detailData";

    pub fn new() -> Self {
        Self {
            inner: Store::new(Self::ID, Vec::new()),
        }
    }

    /// Replace the entire collection with `new_data`.
    pub fn set_detail_data(&self, new_data: Vec<R>) {
        let len = new_data.len();
        self.inner.set(new_data);
        tracing::debug!(records = len, "detail data replaced");
    }

    /// Lend the current collection to `f`.
    pub fn with_detail_data<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&[R]) -> T,
    {
        self.inner.read(|data| f(data.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.inner.read(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read(Vec::is_empty)
    }

    /// Be told whenever the collection is replaced.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&[R]) + Send + Sync + 'static,
        R: 'static,
    {
        self.inner.subscribe(move |data: &Vec<R>| callback(data.as_slice()))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

impl<R: Clone> DetailDataStore<R> {
    /// A copy of the current collection.
    pub fn detail_data(&self) -> Vec<R> {
        self.inner.get()
    }
}

impl<R> Default for DetailDataStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for DetailDataStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for DetailDataStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DetailDataStore").field(&self.inner).finish()
    }
}
