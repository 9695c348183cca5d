//! Shared state containers.
//!
//! A [`Store`] is created once and cloned into whichever part of the
//! application needs it. Clones share state, and subscribers hear about
//! every mutation.

mod store;

pub use store::{Store, SubscriptionId};
