use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::store::{Store, SubscriptionId};

use super::{History, Props, RouteMatch, RouteTable};

/// Navigates over a [`RouteTable`] and tracks the active route.
///
/// The router starts at `/`. Every successful navigation records the new
/// route in its history and publishes it to subscribers. A failed
/// navigation leaves everything as it was.
///
/// Clones share history and the current route. The history lock is held
/// until the new route has been published, so concurrent navigation from
/// several clones keeps `current` in step with the history cursor.
///
/// # Examples
///
/// ```
/// use scatterscope::router::{Router, RouteTable, ViewKind};
///
/// let router = Router::new(RouteTable::default_routes()).unwrap();
/// assert_eq!(router.current().view, ViewKind::Overview);
///
/// router.push("/details/blues").unwrap();
/// assert_eq!(router.current().props.get("genre"), Some("blues"));
///
/// router.back();
/// assert_eq!(router.current().view, ViewKind::Overview);
/// ```
#[derive(Clone, Debug)]
pub struct Router {
    table: Arc<RouteTable>,
    base: Arc<str>,
    history: Arc<Mutex<History<RouteMatch>>>,
    current: Store<RouteMatch>,
}

impl Router {
    pub fn new(table: RouteTable) -> Result<Self> {
        Self::with_base(table, "/")
    }

    /// A router whose paths all live under `base`, e.g. `/app`.
    ///
    /// `app`, `/app` and `/app/` name the same base; `""` and `/` mean the
    /// root.
    pub fn with_base(table: RouteTable, base: &str) -> Result<Self> {
        let base = normalize_base(base);
        let initial = table.resolve("/")?;
        Ok(Self {
            table: Arc::new(table),
            base,
            history: Arc::new(Mutex::new(History::new(initial.clone()))),
            current: Store::new("route", initial),
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The base prefix, empty when paths are served from the root.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve a full path (including the base) without navigating.
    pub fn resolve(&self, url: &str) -> Result<RouteMatch> {
        let path = self.strip_base(url).ok_or_else(|| Error::NoRoute {
            path: url.to_string(),
        })?;
        self.table.resolve(path)
    }

    /// Full path (including the base) of a named route.
    pub fn href(&self, name: &str, params: &Props) -> Result<String> {
        let path = self.table.reverse(name, params)?;
        if self.base.is_empty() {
            return Ok(path);
        }
        if path == "/" {
            return Ok(self.base.to_string());
        }
        Ok(format!("{}{}", self.base, path))
    }

    pub fn current(&self) -> RouteMatch {
        self.current.get()
    }

    /// Navigate to `url`, adding a history entry.
    pub fn push(&self, url: &str) -> Result<RouteMatch> {
        let matched = self.resolve_for_navigation(url)?;
        let mut history = self.lock_history();
        history.push(matched.clone());
        tracing::info!(path = %matched.path, route = %matched.name, "navigated");
        self.current.set(matched.clone());
        Ok(matched)
    }

    /// Navigate to a named route, adding a history entry.
    pub fn push_named(&self, name: &str, params: &Props) -> Result<RouteMatch> {
        let url = self.href(name, params)?;
        self.push(&url)
    }

    /// Navigate to `url`, overwriting the current history entry.
    pub fn replace(&self, url: &str) -> Result<RouteMatch> {
        let matched = self.resolve_for_navigation(url)?;
        let mut history = self.lock_history();
        history.replace(matched.clone());
        tracing::info!(path = %matched.path, route = %matched.name, "replaced");
        self.current.set(matched.clone());
        Ok(matched)
    }

    /// Go back one entry. Returns `None` if there is nothing to go back to.
    pub fn back(&self) -> Option<RouteMatch> {
        self.go(-1)
    }

    /// Go forward one entry. Returns `None` at the newest entry.
    pub fn forward(&self) -> Option<RouteMatch> {
        self.go(1)
    }

    pub fn go(&self, delta: isize) -> Option<RouteMatch> {
        let mut history = self.lock_history();
        let matched = history.go(delta).cloned()?;
        tracing::info!(path = %matched.path, delta, "history traversed");
        self.current.set(matched.clone());
        Some(matched)
    }

    /// Be told about every change of the active route.
    ///
    /// The callback must not navigate this router.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&RouteMatch) + Send + Sync + 'static,
    {
        self.current.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.current.unsubscribe(id)
    }

    fn resolve_for_navigation(&self, url: &str) -> Result<RouteMatch> {
        self.resolve(url).inspect_err(|error| {
            tracing::warn!(url, %error, "navigation rejected");
        })
    }

    fn strip_base<'a>(&self, url: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(url);
        }
        match url.strip_prefix(&*self.base)? {
            "" => Some("/"),
            rest if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }

    // Held across `current.set`; subscribers run under it.
    fn lock_history(&self) -> std::sync::MutexGuard<'_, History<RouteMatch>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// `/app/` and `app` become `/app`; the root becomes `""`.
fn normalize_base(base: &str) -> Arc<str> {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        Arc::from("")
    } else {
        Arc::from(format!("/{trimmed}"))
    }
}
