use serde::{Deserialize, Serialize};

use crate::error::{Result, TracalError};

/// A tracked food item.
///
/// Ids are assigned by the repository and are unique within the collection.
/// The persisted snapshot stores items exactly in this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub calories: i64,
}

impl Item {
    pub fn new(id: u64, name: String, calories: i64) -> Self {
        Self { id, name, calories }
    }
}

/// Parse raw user input into a calorie count.
///
/// The repository only ever receives validated integers; anything that does
/// not parse is rejected here with an explicit error instead of leaking a
/// poisoned value into the running total.
pub fn parse_calories(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TracalError::InvalidCalories(raw.to_string()))
}
