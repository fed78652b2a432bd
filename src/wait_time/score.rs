//! Per-item wait scoring
//!
//! An item's score is its preparation time plus its pending-order count
//! weighted by a penalty. Lower scores mean a shorter expected wait.

use crate::types::{ScoredItem, WaitInputs};
use crate::utils::sanitize_minutes;

/// Penalty applied per pending order when the caller has no preference
pub const DEFAULT_PENALTY: f64 = 1.0;

/// Score an item as `prep_time + pending_orders * penalty`.
///
/// Missing, non-finite or negative inputs count as zero. Never fails.
pub fn item_score<T: WaitInputs + ?Sized>(item: &T, penalty: f64) -> f64 {
    let prep_time = item.prep_time().map(sanitize_minutes).unwrap_or(0.0);
    let pending_orders = item.pending_orders().unwrap_or(0);

    prep_time + f64::from(pending_orders) * penalty
}

/// Pick the item with the lowest score in a single pass.
///
/// Returns `None` for an absent or empty sequence. Only a strictly lower
/// score replaces the current pick, so the first of several equal scores wins.
pub fn recommend_item<T: WaitInputs>(
    items: Option<&[T]>,
    penalty: f64,
) -> Option<ScoredItem<'_, T>> {
    let items = items?;
    let mut scored = items.iter().enumerate().map(|(index, item)| ScoredItem {
        index,
        item,
        score: item_score(item, penalty),
    });

    let first = scored.next()?;
    Some(scored.fold(first, |best, candidate| {
        if candidate.score < best.score {
            candidate
        } else {
            best
        }
    }))
}
