//! Citizen activity catalog.
//!
//! Every activity is worth the same happiness; they differ only in the
//! name the citizen narrates.

use serde::{Deserialize, Serialize};

use crate::citizen::Citizen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Swimming,
    Gym,
    Walking,
    TreePlanting,
}

impl Activity {
    /// Menu order.
    pub const ALL: [Activity; 4] = [
        Activity::Swimming,
        Activity::Gym,
        Activity::Walking,
        Activity::TreePlanting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Gym => "Gym",
            Self::Walking => "Walking",
            Self::TreePlanting => "Tree Planting",
        }
    }

    pub fn execute(self, citizen: &mut Citizen) -> String {
        citizen.participate(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_activities_are_worth_the_same() {
        for activity in Activity::ALL {
            let mut c = Citizen::new("Bo");
            let line = activity.execute(&mut c);
            assert_eq!(c.happiness(), 55);
            assert_eq!(line, format!("Bo is doing {}.", activity.name()));
        }
    }

    #[test]
    fn tree_planting_reads_naturally() {
        let mut c = Citizen::new("Bo");
        assert_eq!(
            Activity::TreePlanting.execute(&mut c),
            "Bo is doing Tree Planting."
        );
    }
}
