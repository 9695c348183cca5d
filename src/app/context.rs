use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::router::{RouteMatch, RouteTable, Router};
use crate::state::{CounterStore, DetailDataStore, Record};

use super::view::view_for;

/// Everything a view may touch, built once per application run.
///
/// Views receive the context by reference; the router and stores inside are
/// shared handles, so clones of the context see the same state.
#[derive(Clone, Debug)]
pub struct AppContext {
    config: Arc<AppConfig>,
    router: Router,
    detail: DetailDataStore,
    counter: CounterStore,
    dataset: Arc<Vec<Record>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self> {
        let router = Router::with_base(RouteTable::default_routes(), &config.base)?;
        let counter = CounterStore::with_name(config.default_name.clone());
        tracing::debug!(base = %config.base, "application context created");
        Ok(Self {
            config: Arc::new(config),
            router,
            detail: DetailDataStore::new(),
            counter,
            dataset: Arc::new(Vec::new()),
        })
    }

    /// Attach the full set of records the overview plots.
    pub fn with_dataset(mut self, records: Vec<Record>) -> Self {
        tracing::debug!(records = records.len(), "dataset attached");
        self.dataset = Arc::new(records);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn detail(&self) -> &DetailDataStore {
        &self.detail
    }

    pub fn counter(&self) -> &CounterStore {
        &self.counter
    }

    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    /// Navigate to `url`.
    pub fn navigate(&self, url: &str) -> Result<RouteMatch> {
        self.router.push(url)
    }

    /// Render whichever view the current route selects.
    pub fn render(&self) -> String {
        let current = self.router.current();
        view_for(current.view).render(self, &current.props)
    }
}

/// Read a JSON array of records.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>> {
    let raw = fs::read_to_string(path).map_err(|source| Error::DatasetIo {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Record> = serde_json::from_str(&raw).map_err(|source| Error::DatasetParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "dataset loaded");
    Ok(records)
}
