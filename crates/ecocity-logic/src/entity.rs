//! Shared capability of every city entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that lives in the city and can be described and run.
///
/// Both methods are narration only: they never touch emission totals or
/// happiness.
pub trait CityEntity {
    /// Display name, fixed at construction.
    fn name(&self) -> &str;

    /// One-line summary of the entity.
    fn describe(&self) -> String;

    /// One-line narration of the entity doing its job.
    fn operate(&self) -> String;
}

/// The four kinds of entity, one registry each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Building,
    Transport,
    Citizen,
    PowerSource,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::Transport => "Transport",
            Self::Citizen => "Citizen",
            Self::PowerSource => "Power source",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
