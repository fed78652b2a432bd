//! Menu data supplied to the estimator
//!
//! Snapshots of the menu and the providers that produce them.

pub mod provider;
pub mod snapshot;

pub use provider::{FileMenuProvider, MenuProvider, StaticMenuProvider};
pub use snapshot::MenuSnapshot;
