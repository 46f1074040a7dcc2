//! Citizens and their happiness.

use serde::{Deserialize, Serialize};

use crate::constants::citizen::{HAPPINESS_PER_ACTIVITY, INITIAL_HAPPINESS};
use crate::entity::CityEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citizen {
    name: String,
    happiness: i32,
}

impl Citizen {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            happiness: INITIAL_HAPPINESS,
        }
    }

    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    /// Take part in an activity. Any activity name is accepted and each
    /// call raises happiness by the same fixed amount, with no ceiling.
    pub fn participate(&mut self, activity: &str) -> String {
        self.happiness += HAPPINESS_PER_ACTIVITY;
        format!("{} is doing {}.", self.name, activity)
    }
}

impl CityEntity for Citizen {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        format!("Citizen: {}, Happiness: {}", self.name, self.happiness)
    }

    fn operate(&self) -> String {
        format!("{} is living and contributing to the city.", self.name)
    }
}
