//! Client-side routing.
//!
//! A [`RouteTable`] maps paths to the view that should be active and binds
//! route parameters as [`Props`]. A [`Router`] walks an in-memory
//! [`History`] over that table and publishes the active [`RouteMatch`] so
//! views can react to navigation.
//!
//! | Path | View | Props |
//! |---|---|---|
//! | `/` | [`ViewKind::Overview`] | none |
//! | `/details/{genre}` | [`ViewKind::Detail`] | `genre` |

mod history;
mod pattern;
mod router;
mod table;

use std::collections::BTreeMap;
use std::fmt;

pub use history::History;
pub use pattern::PathPattern;
pub use router::Router;
pub use table::{Route, RouteTable};

/// The views a route can activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Scatter plot of every genre.
    Overview,
    /// Plot of a single genre's records.
    Detail,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Overview => f.pad("overview"),
            ViewKind::Detail => f.pad("detail"),
        }
    }
}

/// Named string values bound from route parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Props(BTreeMap<String, String>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The outcome of resolving a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    /// Name of the matched route.
    pub name: String,
    pub view: ViewKind,
    /// The path as matched, without any base prefix.
    pub path: String,
    pub props: Props,
}
