//! Per-canteen score statistics
//!
//! Items are grouped by canteen in the order each canteen is first seen, and
//! each group's mean score decides the canteen ranking.

use crate::error::EstimatorError;
use crate::types::{canteen_key, CanteenAggregate, CanteenId, WaitInputs};
use crate::wait_time::score::item_score;
use std::collections::HashMap;
use tracing::debug;

/// Running score totals for one canteen
#[derive(Debug, Clone, PartialEq)]
pub struct CanteenStats {
    pub canteen: CanteenId,
    /// Number of items scored
    pub sample_count: usize,
    /// Sum of all item scores (for calculating mean)
    pub sum_score: f64,
}

impl CanteenStats {
    /// Create new empty statistics
    pub fn new(canteen: impl Into<CanteenId>) -> Self {
        Self {
            canteen: canteen.into(),
            sample_count: 0,
            sum_score: 0.0,
        }
    }

    /// Add an item score
    pub fn add_sample(&mut self, score: f64) {
        self.sample_count += 1;
        self.sum_score += score;
    }

    /// Mean item score, zero when nothing has been scored
    pub fn mean(&self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        self.sum_score / self.sample_count as f64
    }

    pub fn to_aggregate(&self) -> CanteenAggregate {
        CanteenAggregate {
            canteen: self.canteen.clone(),
            avg_score: self.mean(),
            item_count: self.sample_count,
        }
    }
}

/// Group item scores by canteen, preserving first-seen canteen order
pub fn collect_stats<T: WaitInputs>(items: &[T], penalty: f64) -> Vec<CanteenStats> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<CanteenStats> = Vec::new();

    for item in items {
        let canteen = canteen_key(item);
        let position = *positions.entry(canteen).or_insert_with(|| {
            stats.push(CanteenStats::new(canteen));
            stats.len() - 1
        });
        stats[position].add_sample(item_score(item, penalty));
    }

    stats
}

/// Mean score per canteen in first-seen order
pub fn canteen_aggregates<T: WaitInputs>(items: &[T], penalty: f64) -> Vec<CanteenAggregate> {
    collect_stats(items, penalty)
        .iter()
        .map(CanteenStats::to_aggregate)
        .collect()
}

/// Canteens ordered by ascending mean score.
///
/// The sort is stable, so canteens with equal means keep first-seen order.
pub fn rank_canteens<T: WaitInputs>(items: &[T], penalty: f64) -> Vec<CanteenAggregate> {
    let mut ranking = canteen_aggregates(items, penalty);
    ranking.sort_by(|a, b| a.avg_score.total_cmp(&b.avg_score));
    ranking
}

/// Pick the canteen with the lowest mean score.
///
/// An absent sequence is an error rather than `None`: unlike
/// [`recommend_item`](crate::wait_time::score::recommend_item), there is no
/// guard for it. An empty sequence forms no groups and yields `Ok(None)`.
pub fn recommend_canteen<T: WaitInputs>(
    items: Option<&[T]>,
    penalty: f64,
) -> Result<Option<CanteenAggregate>, EstimatorError> {
    let items = items.ok_or(EstimatorError::MissingItems {
        operation: "recommend_canteen",
    })?;

    let best = rank_canteens(items, penalty).into_iter().next();
    if let Some(aggregate) = &best {
        debug!(
            "Recommended canteen {} with avg score {:.2} across {} items",
            aggregate.canteen, aggregate.avg_score, aggregate.item_count
        );
    }

    Ok(best)
}
