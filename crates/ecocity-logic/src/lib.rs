//! Pure simulation logic for Smart Eco City.
//!
//! This crate holds every rule of the city simulation: the entity model,
//! emission rates, bounded registries, the activity log and the upgrade
//! gate. The menu binary and the headless harness are thin layers that
//! build [`command::Command`]s and hand them to a [`city::City`].
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`activity`] | Citizen activity catalog (swimming, gym, walking, tree planting) |
//! | [`activity_log`] | Bounded in-memory log with append/load against a text file |
//! | [`building`] | Residential and commercial buildings |
//! | [`citizen`] | Citizens and their happiness score |
//! | [`city`] | Simulation context owning all registries, totals and the log |
//! | [`command`] | Serializable command set executed by [`city::City`] |
//! | [`config`] | Runtime configuration (log file path) |
//! | [`constants`] | Capacities, thresholds, file names |
//! | [`emissions`] | Emission-rate table, per-trip emissions, running totals |
//! | [`entity`] | Shared `describe`/`operate` capability and entity kinds |
//! | [`error`] | Recoverable error kinds |
//! | [`power`] | Solar and coal power sources |
//! | [`registry`] | Bounded, insertion-ordered owning collection |
//! | [`transport`] | Electric buses, diesel buses and cars |
//! | [`upgrade`] | Budget-gated building upgrade |

pub mod activity;
pub mod activity_log;
pub mod building;
pub mod citizen;
pub mod city;
pub mod command;
pub mod config;
pub mod constants;
pub mod emissions;
pub mod entity;
pub mod error;
pub mod power;
pub mod registry;
pub mod transport;
pub mod upgrade;

pub use city::City;
pub use entity::CityEntity;
pub use error::CityError;
