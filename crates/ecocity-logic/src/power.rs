//! Power sources: solar and coal plants.

use serde::{Deserialize, Serialize};

use crate::entity::CityEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerSourceKind {
    Solar,
    Coal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerSource {
    name: String,
    kind: PowerSourceKind,
}

impl PowerSource {
    pub fn new(name: impl Into<String>, kind: PowerSourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn solar(name: impl Into<String>) -> Self {
        Self::new(name, PowerSourceKind::Solar)
    }

    pub fn coal(name: impl Into<String>) -> Self {
        Self::new(name, PowerSourceKind::Coal)
    }

    pub fn kind(&self) -> PowerSourceKind {
        self.kind
    }
}

impl CityEntity for PowerSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        match self.kind {
            PowerSourceKind::Solar => format!("Solar Plant: {}", self.name),
            PowerSourceKind::Coal => format!("Coal Plant: {}", self.name),
        }
    }

    fn operate(&self) -> String {
        match self.kind {
            PowerSourceKind::Solar => format!("{} is generating clean solar energy.", self.name),
            PowerSourceKind::Coal => format!(
                "{} is generating dirty power with heavy CO2 output.",
                self.name
            ),
        }
    }
}
