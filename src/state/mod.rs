//! Application state shared between views.
//!
//! - [`DetailDataStore`]: the records the detail view shows
//! - [`CounterStore`]: an incrementing counter and a named string value

mod counter;
mod detail;

pub use counter::{CounterState, CounterStore, DEFAULT_NAME};
pub use detail::{DetailDataStore, Record};
