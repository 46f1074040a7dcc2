//! Budget-gated building upgrade.
//!
//! The gate only announces: a successful upgrade leaves the building
//! exactly as it was.

use crate::building::Building;
use crate::constants::upgrade::MIN_BUDGET;
use crate::entity::CityEntity;
use crate::error::{CityError, Result};

pub fn upgrade(building: &Building, budget: i64) -> Result<String> {
    if budget < MIN_BUDGET {
        return Err(CityError::BudgetExceeded { budget });
    }
    Ok(format!("{} upgraded successfully!", building.name()))
}
