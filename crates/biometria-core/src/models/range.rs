use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A band of biological age outcomes that one or more boards map into.
///
/// `id` exists only to join stored board rows to their range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Range {
    pub id: Uuid,
    pub min_age: i32,
    pub max_age: i32,
}

impl Range {
    pub fn new(min_age: i32, max_age: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            min_age,
            max_age,
        }
    }

    /// A flat band maps every value to the same age.
    pub fn is_flat(&self) -> bool {
        self.min_age == self.max_age
    }
}
