//! Buildings, residential or commercial.
//!
//! The two kinds differ only in how they narrate their work; energy
//! consumption means the same thing for both.

use serde::{Deserialize, Serialize};

use crate::entity::CityEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    Residential,
    Commercial,
}

impl BuildingKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    name: String,
    /// Energy use in kWh.
    energy_consumption: u32,
    kind: BuildingKind,
}

impl Building {
    pub fn new(name: impl Into<String>, energy_consumption: u32, kind: BuildingKind) -> Self {
        Self {
            name: name.into(),
            energy_consumption,
            kind,
        }
    }

    pub fn residential(name: impl Into<String>, energy_consumption: u32) -> Self {
        Self::new(name, energy_consumption, BuildingKind::Residential)
    }

    pub fn commercial(name: impl Into<String>, energy_consumption: u32) -> Self {
        Self::new(name, energy_consumption, BuildingKind::Commercial)
    }

    pub fn energy_consumption(&self) -> u32 {
        self.energy_consumption
    }

    pub fn kind(&self) -> BuildingKind {
        self.kind
    }
}

impl CityEntity for Building {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        format!(
            "{}: {}, Energy: {} kWh",
            self.kind.label(),
            self.name,
            self.energy_consumption
        )
    }

    fn operate(&self) -> String {
        match self.kind {
            BuildingKind::Residential => format!(
                "{0} is housing citizens. {0} (Residential) uses {1} kWh.",
                self.name, self.energy_consumption
            ),
            BuildingKind::Commercial => format!(
                "{} is generating revenue using {} kWh.",
                self.name, self.energy_consumption
            ),
        }
    }
}
