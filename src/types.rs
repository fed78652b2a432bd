//! Common types used throughout the wait estimator

use crate::utils::{count_from_value, minutes_from_value, sanitize_minutes, text_from_value};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier for a canteen (serving location or vendor)
pub type CanteenId = String;

/// Canteen that items without an identifier belong to
pub const DEFAULT_CANTEEN: &str = "A";

/// Anything that can be scored for expected wait.
///
/// Every field is optional; the estimator treats missing or invalid values as
/// zero and a missing canteen as [`DEFAULT_CANTEEN`].
pub trait WaitInputs {
    /// Preparation time in minutes
    fn prep_time(&self) -> Option<f64>;

    /// Number of orders queued ahead for this item
    fn pending_orders(&self) -> Option<u32>;

    /// Canteen identifier
    fn canteen(&self) -> Option<&str> {
        None
    }
}

/// Resolve the canteen an item is grouped under
pub fn canteen_key<T: WaitInputs + ?Sized>(item: &T) -> &str {
    item.canteen()
        .filter(|canteen| !canteen.is_empty())
        .unwrap_or(DEFAULT_CANTEEN)
}

/// A menu entry as supplied by the menu feed.
///
/// Decoding is lenient: bad numeric values become 0 and a missing canteen
/// stays `None` (grouped under [`DEFAULT_CANTEEN`]). Decoding only fails on
/// malformed JSON, never on a bad field value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub name: Option<String>,
    /// Preparation time in minutes
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub prep_time: f64,
    /// Orders queued ahead
    #[serde(default, deserialize_with = "lenient_count")]
    pub pending_orders: u32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub canteen: Option<CanteenId>,
}

impl MenuItem {
    /// Create an item in the default canteen
    pub fn new(prep_time: f64, pending_orders: u32) -> Self {
        Self {
            prep_time: sanitize_minutes(prep_time),
            pending_orders,
            ..Default::default()
        }
    }

    pub fn with_canteen(mut self, canteen: impl Into<CanteenId>) -> Self {
        self.canteen = Some(canteen.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Canteen this item is grouped under
    pub fn canteen_id(&self) -> &str {
        canteen_key(self)
    }

    /// Best label for display: name, then id, then a placeholder
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("(unnamed item)")
    }
}

impl WaitInputs for MenuItem {
    fn prep_time(&self) -> Option<f64> {
        Some(self.prep_time)
    }

    fn pending_orders(&self) -> Option<u32> {
        Some(self.pending_orders)
    }

    fn canteen(&self) -> Option<&str> {
        self.canteen.as_deref()
    }
}

fn lenient_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(minutes_from_value(&value))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(&value))
}

/// An item paired with its wait score
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem<'a, T> {
    /// Position of the item in the scored sequence
    pub index: usize,
    pub item: &'a T,
    pub score: f64,
}

impl<T> Clone for ScoredItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScoredItem<'_, T> {}

/// Mean wait score of all items served by one canteen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanteenAggregate {
    pub canteen: CanteenId,
    pub avg_score: f64,
    pub item_count: usize,
}

impl std::fmt::Display for CanteenAggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "canteen {} (avg score {:.2} over {} items)",
            self.canteen, self.avg_score, self.item_count
        )
    }
}
