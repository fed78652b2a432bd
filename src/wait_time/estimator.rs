//! Configured wait estimator
//!
//! Wraps the scoring functions with a validated penalty so callers that hold
//! a configuration don't pass the multiplier around by hand.

use crate::error::EstimatorError;
use crate::report::Recommendation;
use crate::types::{CanteenAggregate, MenuItem, ScoredItem, WaitInputs};
use crate::wait_time::score::{self, DEFAULT_PENALTY};
use crate::wait_time::statistics;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for wait estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Minutes added per pending order
    pub penalty: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            penalty: DEFAULT_PENALTY,
        }
    }
}

impl EstimatorConfig {
    pub fn with_penalty(penalty: f64) -> Self {
        Self { penalty }
    }

    /// Rank by preparation time alone, ignoring the order queue
    pub fn prep_time_only() -> Self {
        Self { penalty: 0.0 }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.penalty.is_finite() || self.penalty < 0.0 {
            return Err(EstimatorError::InvalidPenalty {
                value: self.penalty,
            });
        }
        Ok(())
    }
}

/// Scores items and canteens with a fixed, validated penalty
#[derive(Debug, Clone, Default)]
pub struct WaitEstimator {
    config: EstimatorConfig,
}

impl WaitEstimator {
    /// Create a new estimator
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn penalty(&self) -> f64 {
        self.config.penalty
    }

    /// Replace the configuration, keeping the old one if the new one is invalid
    pub fn update_config(&mut self, config: EstimatorConfig) -> Result<(), EstimatorError> {
        config.validate()?;
        debug!(
            "Updated wait penalty from {} to {}",
            self.config.penalty, config.penalty
        );
        self.config = config;
        Ok(())
    }

    pub fn score<T: WaitInputs + ?Sized>(&self, item: &T) -> f64 {
        score::item_score(item, self.config.penalty)
    }

    pub fn recommend_item<'a, T: WaitInputs>(&self, items: &'a [T]) -> Option<ScoredItem<'a, T>> {
        let best = score::recommend_item(Some(items), self.config.penalty);

        match &best {
            Some(scored) => debug!(
                "Recommended item #{} with score {:.2} out of {} items",
                scored.index,
                scored.score,
                items.len()
            ),
            None => debug!("No items to recommend from"),
        }

        best
    }

    pub fn recommend_canteen<T: WaitInputs>(&self, items: &[T]) -> Option<CanteenAggregate> {
        // A slice is never absent, so the missing-items error can't occur here
        statistics::recommend_canteen(Some(items), self.config.penalty)
            .ok()
            .flatten()
    }

    pub fn rank_canteens<T: WaitInputs>(&self, items: &[T]) -> Vec<CanteenAggregate> {
        statistics::rank_canteens(items, self.config.penalty)
    }

    /// Build a full recommendation for a menu
    pub fn recommend(&self, items: &[MenuItem]) -> Recommendation {
        Recommendation::build(items, self.config.penalty)
    }
}
