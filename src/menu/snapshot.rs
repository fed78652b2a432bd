//! Point-in-time menu snapshots
//!
//! Menu feeds arrive either as a bare JSON array of items or as an object
//! with an `items` array and an optional `capturedAt` timestamp.

use crate::error::EstimatorError;
use crate::types::MenuItem;
use crate::utils::current_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;

/// Menu items as seen at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSnapshot {
    pub items: Vec<MenuItem>,
    pub captured_at: DateTime<Utc>,
}

impl MenuSnapshot {
    /// Snapshot the given items now
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            captured_at: current_timestamp(),
        }
    }

    /// Decode a snapshot from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, EstimatorError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| EstimatorError::InvalidSnapshot {
                reason: format!("malformed JSON: {}", e),
            })?;
        Self::from_value(value)
    }

    /// Decode a snapshot from a JSON byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EstimatorError> {
        let value: Value =
            serde_json::from_reader(reader).map_err(|e| EstimatorError::InvalidSnapshot {
                reason: format!("malformed JSON: {}", e),
            })?;
        Self::from_value(value)
    }

    /// Decode a snapshot from an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self, EstimatorError> {
        match value {
            Value::Array(items) => Ok(Self::new(decode_items(items)?)),
            Value::Object(mut fields) => {
                let items = match fields.remove("items") {
                    Some(Value::Array(items)) => decode_items(items)?,
                    _ => {
                        return Err(EstimatorError::InvalidSnapshot {
                            reason: "object snapshot must carry an `items` array".to_string(),
                        })
                    }
                };

                let captured_at = match fields.remove("capturedAt") {
                    None | Some(Value::Null) => current_timestamp(),
                    Some(value) => serde_json::from_value(value).map_err(|e| {
                        EstimatorError::InvalidSnapshot {
                            reason: format!("invalid capturedAt: {}", e),
                        }
                    })?,
                };

                Ok(Self { items, captured_at })
            }
            _ => Err(EstimatorError::InvalidSnapshot {
                reason: "expected an array of items or an object with an `items` array"
                    .to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct canteens in the order they first appear
    pub fn canteens(&self) -> Vec<&str> {
        let mut canteens: Vec<&str> = Vec::new();
        for item in &self.items {
            let canteen = item.canteen_id();
            if !canteens.contains(&canteen) {
                canteens.push(canteen);
            }
        }
        canteens
    }

    /// Snapshot restricted to one canteen, keeping item order and capture time
    pub fn for_canteen(&self, canteen: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.canteen_id() == canteen)
                .cloned()
                .collect(),
            captured_at: self.captured_at,
        }
    }
}

fn decode_items(items: Vec<Value>) -> Result<Vec<MenuItem>, EstimatorError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(EstimatorError::InvalidSnapshot {
                    reason: format!("item {} is not an object", index),
                });
            }
            serde_json::from_value(item).map_err(|e| EstimatorError::InvalidSnapshot {
                reason: format!("item {}: {}", index, e),
            })
        })
        .collect()
}
