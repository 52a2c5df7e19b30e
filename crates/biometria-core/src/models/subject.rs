use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

/// Whole years elapsed from `birth` to `on`.
pub fn chronological_age(birth: Date, on: Date) -> Result<i32, CoreError> {
    if on < birth {
        return Err(CoreError::DateBeforeBirth { birth, on });
    }
    let span = birth.until((jiff::Unit::Year, on))?;
    Ok(i32::from(span.get_years()))
}
