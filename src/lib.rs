//! # Scatterscope
//!
//! Routing and shared state for a genre scatter-plot explorer.
//!
//! The crate is organised bottom-up:
//!
//! ## Stores
//!
//! - [`Store<T>`] - A shared state container with change subscriptions
//! - [`DetailDataStore`] - The records shown by the detail view
//! - [`CounterStore`] - An incrementing counter and a named string value
//!
//! ## Routing
//!
//! - [`RouteTable`] - `/` to the overview, `/details/:genre` to the detail view
//! - [`Router`] - History-backed navigation that publishes the active route
//!
//! ## Shell
//!
//! - [`AppContext`] - Builds the router and stores once and hands them to views
//! - [`AppConfig`] - Optional TOML settings
//!
//! ```
//! use scatterscope::{AppConfig, AppContext, ViewKind};
//!
//! let ctx = AppContext::new(AppConfig::default()).unwrap();
//! let matched = ctx.navigate("/details/jazz").unwrap();
//!
//! assert_eq!(matched.view, ViewKind::Detail);
//! assert_eq!(matched.props.get("genre"), Some("jazz"));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod router;
pub mod state;
pub mod store;

// Re-export main types for convenience
pub use app::{AppContext, View};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use router::{Props, RouteMatch, RouteTable, Router, ViewKind};
pub use state::{CounterStore, DetailDataStore, Record};
pub use store::Store;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let table = RouteTable::default_routes();
        assert_eq!(table.resolve("/").unwrap().view, ViewKind::Overview);

        let counter = CounterStore::new();
        counter.increment();
        assert_eq!(counter.count(), 1);
    }
}
