//! Recommendation reports
//!
//! A [`Recommendation`] bundles everything the estimator can say about one
//! menu snapshot: the fastest item, the fastest canteen, and the full canteen
//! ranking. Reports serialize to camelCase JSON and render as plain text.

use crate::types::{CanteenAggregate, MenuItem, ScoredItem};
use crate::utils::current_timestamp;
use crate::wait_time::{rank_canteens, recommend_item};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned copy of the winning item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedItem {
    /// Position of the item in the snapshot
    pub index: usize,
    pub item: MenuItem,
    pub score: f64,
}

impl From<ScoredItem<'_, MenuItem>> for RecommendedItem {
    fn from(scored: ScoredItem<'_, MenuItem>) -> Self {
        Self {
            index: scored.index,
            item: scored.item.clone(),
            score: scored.score,
        }
    }
}

impl fmt::Display for RecommendedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [canteen {}] score {:.2} (prep {:.1} min, {} pending)",
            self.item.label(),
            self.item.canteen_id(),
            self.score,
            self.item.prep_time,
            self.item.pending_orders
        )
    }
}

/// Everything recommended for one menu snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub generated_at: DateTime<Utc>,
    pub penalty: f64,
    pub item_count: usize,
    pub best_item: Option<RecommendedItem>,
    pub best_canteen: Option<CanteenAggregate>,
    /// Canteens by ascending mean score
    pub canteens: Vec<CanteenAggregate>,
}

impl Recommendation {
    pub fn build(items: &[MenuItem], penalty: f64) -> Self {
        let best_item = recommend_item(Some(items), penalty).map(RecommendedItem::from);
        let canteens = rank_canteens(items, penalty);

        Self {
            generated_at: current_timestamp(),
            penalty,
            item_count: items.len(),
            best_item,
            best_canteen: canteens.first().cloned(),
            canteens,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Menu items: {} (penalty {:.2})",
            self.item_count, self.penalty
        )?;

        if self.is_empty() {
            return writeln!(f, "Nothing to recommend");
        }

        if let Some(item) = &self.best_item {
            writeln!(f, "Fastest item: {}", item)?;
        }
        if let Some(canteen) = &self.best_canteen {
            writeln!(f, "Fastest canteen: {}", canteen)?;
        }

        writeln!(f, "Canteen ranking:")?;
        for (rank, canteen) in self.canteens.iter().enumerate() {
            writeln!(f, "  {}. {}", rank + 1, canteen)?;
        }

        Ok(())
    }
}
