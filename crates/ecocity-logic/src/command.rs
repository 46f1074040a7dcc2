//! Commands a [`City`](crate::city::City) can execute.
//!
//! The menu builds these from typed input; scenario files spell them as
//! JSON, tagged by `op`:
//!
//! ```
//! use ecocity_logic::command::Command;
//!
//! let cmd: Command = serde_json::from_str(
//!     r#"{"op": "add_car", "name": "Taxi1", "distance_km": 10}"#,
//! ).unwrap();
//! assert_eq!(cmd, Command::AddCar { name: "Taxi1".into(), distance_km: 10 });
//! ```

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::building::BuildingKind;
use crate::power::PowerSourceKind;
use crate::transport::BusKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddBuilding {
        name: String,
        energy: u32,
        kind: BuildingKind,
    },
    /// Electric buses ignore `distance_km`.
    AddBus {
        name: String,
        kind: BusKind,
        #[serde(default)]
        distance_km: i64,
    },
    /// Register a citizen, then run each activity in order.
    AddCitizen {
        name: String,
        #[serde(default)]
        activities: Vec<Activity>,
    },
    Participate {
        citizen: usize,
        activity: Activity,
    },
    AddPowerSource {
        name: String,
        kind: PowerSourceKind,
    },
    ListAll,
    UpgradeBuilding {
        index: usize,
        budget: i64,
    },
    AddCar {
        name: String,
        distance_km: i64,
    },
    ShowEmissions,
    SaveLog,
    LoadLog,
    ShowLog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let bus: Command =
            serde_json::from_str(r#"{"op": "add_bus", "name": "Volt", "kind": "electric"}"#)
                .unwrap();
        assert_eq!(
            bus,
            Command::AddBus {
                name: "Volt".into(),
                kind: BusKind::Electric,
                distance_km: 0
            }
        );

        let citizen: Command =
            serde_json::from_str(r#"{"op": "add_citizen", "name": "Ada"}"#).unwrap();
        assert_eq!(
            citizen,
            Command::AddCitizen {
                name: "Ada".into(),
                activities: vec![],
            }
        );
    }

    #[test]
    fn activities_use_snake_case() {
        let cmd: Command = serde_json::from_str(
            r#"{"op": "add_citizen", "name": "Ada", "activities": ["tree_planting", "gym"]}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            Command::AddCitizen {
                name: "Ada".into(),
                activities: vec![Activity::TreePlanting, Activity::Gym],
            }
        );
    }
}
