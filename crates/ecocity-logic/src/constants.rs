//! Simulation constants: capacities and thresholds.
//!
//! These are fixed for the lifetime of the program. Nothing here is read
//! from the environment.

pub mod capacity {
    pub const MAX_BUILDINGS: usize = 5;
    pub const MAX_TRANSPORTS: usize = 5;
    pub const MAX_CITIZENS: usize = 5;
    pub const MAX_POWER: usize = 5;
    /// Entries held in the in-memory activity log.
    pub const MAX_LOGS: usize = 10;
}

pub mod citizen {
    pub const INITIAL_HAPPINESS: i32 = 50;
    /// Happiness gained per activity, regardless of which activity.
    pub const HAPPINESS_PER_ACTIVITY: i32 = 5;
}

pub mod upgrade {
    /// Smallest budget that passes the upgrade gate (inclusive).
    pub const MIN_BUDGET: i64 = 500;
}

/// Backing file for the activity log, relative to the working directory.
pub const LOG_FILE: &str = "city_log.txt";
