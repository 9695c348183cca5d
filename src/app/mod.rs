//! The application shell and its views.
//!
//! [`AppContext`] owns the router and stores for one run and is handed to
//! each [`View`] explicitly; nothing here is global.

mod context;
mod view;

pub use context::{load_dataset, AppContext};
pub use view::{view_for, DetailView, OverviewView, View};
