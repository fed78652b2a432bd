//! Canteen Wait - wait-time heuristics for campus canteens
//!
//! This crate scores menu items by expected wait and recommends the item or
//! canteen with the shortest one, given menu snapshots supplied by a
//! food-ordering front end.

pub mod config;
pub mod error;
pub mod menu;
pub mod report;
pub mod types;
pub mod utils;
pub mod wait_time;

// Re-export commonly used types and traits
pub use error::{EstimatorError, Result};
pub use types::*;

// Re-export key components
pub use menu::{FileMenuProvider, MenuProvider, MenuSnapshot, StaticMenuProvider};
pub use report::{Recommendation, RecommendedItem};
pub use wait_time::{
    canteen_aggregates, item_score, rank_canteens, recommend_canteen, recommend_item,
    EstimatorConfig, WaitEstimator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
