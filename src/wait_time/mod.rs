//! Wait estimation for menu items and canteens
//!
//! This module scores menu items by expected wait and recommends the item or
//! canteen with the shortest one.

pub mod estimator;
pub mod score;
pub mod statistics;

// Re-export commonly used types
pub use estimator::{EstimatorConfig, WaitEstimator};
pub use score::{item_score, recommend_item, DEFAULT_PENALTY};
pub use statistics::{canteen_aggregates, rank_canteens, recommend_canteen, CanteenStats};
