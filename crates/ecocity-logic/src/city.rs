//! The simulation context.
//!
//! A [`City`] owns the four entity registries, the emission totals and the
//! activity log for one run. Every operation returns the narration lines
//! the menu prints, in order; failures come back as [`CityError`] and
//! leave the city unchanged.
//!
//! Registrations append a line to the activity log. A full log does not
//! fail the registration: the entity is kept and a `Log full.` line is
//! added to the narration instead.
//!
//! [`CityError`]: crate::error::CityError

use crate::activity::Activity;
use crate::activity_log::ActivityLog;
use crate::building::{Building, BuildingKind};
use crate::citizen::Citizen;
use crate::command::Command;
use crate::config::CityConfig;
use crate::constants::capacity::{MAX_BUILDINGS, MAX_CITIZENS, MAX_POWER, MAX_TRANSPORTS};
use crate::emissions::{Emission, EmissionTotals};
use crate::entity::{CityEntity, EntityKind};
use crate::error::Result;
use crate::power::{PowerSource, PowerSourceKind};
use crate::registry::Registry;
use crate::transport::{BusKind, Transport};
use crate::upgrade::upgrade;

#[derive(Debug)]
pub struct City {
    config: CityConfig,
    buildings: Registry<Building>,
    transports: Registry<Transport>,
    citizens: Registry<Citizen>,
    power_sources: Registry<PowerSource>,
    emissions: EmissionTotals,
    log: ActivityLog,
}

impl Default for City {
    fn default() -> Self {
        Self::new(CityConfig::default())
    }
}

impl City {
    pub fn new(config: CityConfig) -> Self {
        Self {
            config,
            buildings: Registry::new(EntityKind::Building, MAX_BUILDINGS),
            transports: Registry::new(EntityKind::Transport, MAX_TRANSPORTS),
            citizens: Registry::new(EntityKind::Citizen, MAX_CITIZENS),
            power_sources: Registry::new(EntityKind::PowerSource, MAX_POWER),
            emissions: EmissionTotals::new(),
            log: ActivityLog::new(),
        }
    }

    pub fn config(&self) -> &CityConfig {
        &self.config
    }

    pub fn buildings(&self) -> &Registry<Building> {
        &self.buildings
    }

    pub fn transports(&self) -> &Registry<Transport> {
        &self.transports
    }

    pub fn citizens(&self) -> &Registry<Citizen> {
        &self.citizens
    }

    pub fn power_sources(&self) -> &Registry<PowerSource> {
        &self.power_sources
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn total_emissions(&self) -> Emission {
        self.emissions.snapshot()
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        match command {
            Command::AddBuilding { name, energy, kind } => self.add_building(name, energy, kind),
            Command::AddBus {
                name,
                kind,
                distance_km,
            } => self.add_bus(name, kind, distance_km),
            Command::AddCitizen { name, activities } => {
                let mut lines = self.add_citizen(name)?;
                let index = self.citizens.len() - 1;
                for activity in activities {
                    lines.extend(self.participate(index, activity)?);
                }
                Ok(lines)
            }
            Command::Participate { citizen, activity } => self.participate(citizen, activity),
            Command::AddPowerSource { name, kind } => self.add_power_source(name, kind),
            Command::ListAll => Ok(self.list_all()),
            Command::UpgradeBuilding { index, budget } => self.upgrade_building(index, budget),
            Command::AddCar { name, distance_km } => self.add_car_and_drive(name, distance_km),
            Command::ShowEmissions => Ok(self.emissions.report_lines()),
            Command::SaveLog => self.save_log(),
            Command::LoadLog => self.load_log().map(|n| vec![format!("Loaded {n} log entries.")]),
            Command::ShowLog => self.show_log(),
        }
    }

    fn record(&mut self, entry: String, lines: &mut Vec<String>) {
        if let Err(err) = self.log.add(entry) {
            log::warn!("Dropping log entry: {err}");
            lines.push("Log full.".to_string());
        }
    }

    pub fn add_building(
        &mut self,
        name: impl Into<String>,
        energy: u32,
        kind: BuildingKind,
    ) -> Result<Vec<String>> {
        let index = self
            .buildings
            .add(Building::new(name, energy, kind))
            .inspect_err(|e| log::warn!("Building rejected: {e}"))?;
        let building = self.buildings.get(index)?;
        let name = building.name().to_string();
        let mut lines = vec![building.describe(), building.operate()];
        log::info!("Registered {:?} building {} at index {}", kind, name, index);
        self.record(format!("Added Building: {name}"), &mut lines);
        Ok(lines)
    }

    /// Register a bus. Diesel buses immediately drive `distance_km` and
    /// their emissions are added to the totals; electric buses don't emit.
    pub fn add_bus(
        &mut self,
        name: impl Into<String>,
        kind: BusKind,
        distance_km: i64,
    ) -> Result<Vec<String>> {
        let mut lines = self.register_transport(Transport::bus(name, kind), distance_km)?;
        let name = self.newest_transport_name();
        self.record(format!("Added Bus: {name}"), &mut lines);
        Ok(lines)
    }

    pub fn add_car_and_drive(
        &mut self,
        name: impl Into<String>,
        distance_km: i64,
    ) -> Result<Vec<String>> {
        let mut lines = self.register_transport(Transport::car(name), distance_km)?;
        let name = self.newest_transport_name();
        self.record(format!("Added Car: {name}"), &mut lines);
        Ok(lines)
    }

    /// Register any vehicle, including diesel buses with custom rates.
    pub fn register_transport(
        &mut self,
        transport: Transport,
        distance_km: i64,
    ) -> Result<Vec<String>> {
        let index = self
            .transports
            .add(transport)
            .inspect_err(|e| log::warn!("Transport rejected: {e}"))?;
        let vehicle = self.transports.get(index)?;
        let mut lines = vec![vehicle.travel(), vehicle.describe(), vehicle.operate()];
        if vehicle.emits() {
            let trip = vehicle.emit(distance_km);
            lines.extend(trip.trip_lines());
            self.emissions.record(&trip);
            log::info!(
                "{} drove {} km: cox={} sox={:.2} nox={:.2}",
                vehicle.name(),
                distance_km,
                trip.cox,
                trip.sox,
                trip.nox
            );
        }
        Ok(lines)
    }

    fn newest_transport_name(&self) -> String {
        self.transports
            .iter()
            .last()
            .map(|t| t.name().to_string())
            .unwrap_or_default()
    }

    pub fn add_citizen(&mut self, name: impl Into<String>) -> Result<Vec<String>> {
        let index = self
            .citizens
            .add(Citizen::new(name))
            .inspect_err(|e| log::warn!("Citizen rejected: {e}"))?;
        let citizen = self.citizens.get(index)?;
        let name = citizen.name().to_string();
        let mut lines = vec![citizen.describe(), citizen.operate()];
        log::info!("Registered citizen {} at index {}", name, index);
        self.record(format!("Citizen added: {name}"), &mut lines);
        Ok(lines)
    }

    pub fn participate(&mut self, citizen: usize, activity: Activity) -> Result<Vec<String>> {
        let citizen = self.citizens.get_mut(citizen)?;
        let line = activity.execute(citizen);
        log::debug!("{} happiness now {}", citizen.name(), citizen.happiness());
        Ok(vec![line])
    }

    pub fn add_power_source(
        &mut self,
        name: impl Into<String>,
        kind: PowerSourceKind,
    ) -> Result<Vec<String>> {
        let index = self
            .power_sources
            .add(PowerSource::new(name, kind))
            .inspect_err(|e| log::warn!("Power source rejected: {e}"))?;
        let plant = self.power_sources.get(index)?;
        let name = plant.name().to_string();
        let mut lines = vec![plant.describe(), plant.operate()];
        log::info!("Registered {:?} power source {} at index {}", kind, name, index);
        self.record(format!("Power Source added: {name}"), &mut lines);
        Ok(lines)
    }

    /// Every entity, grouped by kind in insertion order.
    pub fn list_all(&self) -> Vec<String> {
        let mut lines = vec!["--- Buildings ---".to_string()];
        for b in &self.buildings {
            lines.push(b.describe());
            lines.push(b.operate());
        }
        lines.push("--- Buses ---".to_string());
        for t in &self.transports {
            lines.push(t.describe());
            lines.push(t.travel());
            lines.push(t.operate());
        }
        lines.push("--- Citizens ---".to_string());
        for c in &self.citizens {
            lines.push(c.describe());
            lines.push(c.operate());
        }
        lines.push("--- Power Sources ---".to_string());
        for p in &self.power_sources {
            lines.push(p.describe());
            lines.push(p.operate());
        }
        lines
    }

    pub fn upgrade_building(&mut self, index: usize, budget: i64) -> Result<Vec<String>> {
        let building = self.buildings.get(index)?;
        let line = upgrade(building, budget).inspect_err(|_| {
            log::warn!("Upgrade of {} refused, budget {}", building.name(), budget);
        })?;
        let entry = format!("Upgraded: {}", building.name());
        let mut lines = vec![line];
        self.record(entry, &mut lines);
        Ok(lines)
    }

    /// Append the buffered log to the configured file.
    pub fn save_log(&self) -> Result<Vec<String>> {
        self.log.save_to_file(&self.config.log_path)?;
        Ok(vec!["Log saved to file.".to_string()])
    }

    /// Pull lines from the configured file into the buffer.
    pub fn load_log(&mut self) -> Result<usize> {
        let path = self.config.log_path.clone();
        self.log.load_from_file(path)
    }

    pub fn show_log(&self) -> Result<Vec<String>> {
        let text = ActivityLog::show()?;
        let mut lines = vec!["-- City Log --".to_string()];
        lines.extend(text.lines().map(str::to_string));
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CityError;
    use crate::transport::TransportKind;

    #[test]
    fn new_city_is_empty() {
        let city = City::default();
        assert!(city.buildings().is_empty());
        assert!(city.transports().is_empty());
        assert!(city.citizens().is_empty());
        assert!(city.power_sources().is_empty());
        assert!(city.log().is_empty());
        assert_eq!(city.total_emissions(), Emission::ZERO);
    }

    #[test]
    fn taxi_drive_updates_totals() {
        let mut city = City::default();
        let lines = city.add_car_and_drive("Taxi1", 10).unwrap();
        assert_eq!(
            lines,
            vec![
                "Taxi1 is driving through the city.",
                "Car: Taxi1",
                "Taxi1 is driving on roads, emitting pollutants.",
                "COX emission produced: 1400 g/km",
                "SOX emission produced: 7.00 g/km",
                "NOX emission produced: 13.00 g/km",
            ]
        );
        let totals = city.total_emissions();
        assert_eq!(totals.cox, 1400);
        assert!((totals.sox - 7.0).abs() < 1e-9);
        assert!((totals.nox - 13.0).abs() < 1e-9);
        assert_eq!(city.log().entries(), ["Added Car: Taxi1"]);
    }

    #[test]
    fn huge_distance_is_recorded_without_panicking() {
        let mut city = City::default();
        let lines = city.add_car_and_drive("Far", 100_000_000_000_000_000).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(city.transports().len(), 1);
        assert_eq!(city.total_emissions().cox, 140_i64.wrapping_mul(100_000_000_000_000_000));
    }

    #[test]
    fn electric_bus_leaves_totals_alone() {
        let mut city = City::default();
        let lines = city.add_bus("Volt", BusKind::Electric, 50).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(city.total_emissions(), Emission::ZERO);
        assert_eq!(
            city.transports().get(0).unwrap().kind(),
            TransportKind::ElectricBus
        );
    }

    #[test]
    fn full_registry_changes_nothing() {
        let mut city = City::default();
        for i in 0..5 {
            city.add_car_and_drive(format!("Car{i}"), 1).unwrap();
        }
        let before = city.total_emissions();
        let err = city.add_bus("Late", BusKind::Diesel, 100).unwrap_err();
        assert!(matches!(err, CityError::CapacityExceeded { capacity: 5, .. }));
        assert_eq!(city.total_emissions(), before);
        assert_eq!(city.transports().len(), 5);
        assert_eq!(city.log().len(), 5);
    }

    #[test]
    fn full_log_keeps_the_entity() {
        let mut city = City::default();
        for i in 0..5 {
            city.add_building(format!("B{i}"), 10, BuildingKind::Residential).unwrap();
            city.add_citizen(format!("C{i}")).unwrap();
        }
        assert!(city.log().is_full());

        let lines = city.add_power_source("Sun", PowerSourceKind::Solar).unwrap();
        assert_eq!(lines.last().unwrap(), "Log full.");
        assert_eq!(city.power_sources().len(), 1);
        assert_eq!(city.log().len(), 10);
    }

    #[test]
    fn upgrade_logs_only_on_success() {
        let mut city = City::default();
        city.add_building("Hall", 200, BuildingKind::Commercial).unwrap();

        let err = city.upgrade_building(0, 499).unwrap_err();
        assert_eq!(err, CityError::BudgetExceeded { budget: 499 });
        assert_eq!(city.log().len(), 1);

        let lines = city.upgrade_building(0, 500).unwrap();
        assert_eq!(lines, vec!["Hall upgraded successfully!"]);
        assert_eq!(city.log().entries()[1], "Upgraded: Hall");
    }

    #[test]
    fn upgrade_unknown_building_is_out_of_range() {
        let mut city = City::default();
        let err = city.upgrade_building(3, 1000).unwrap_err();
        assert!(matches!(err, CityError::IndexOutOfRange { index: 3, count: 0, .. }));
    }

    #[test]
    fn add_citizen_with_activities() {
        let mut city = City::default();
        let lines = city
            .execute(Command::AddCitizen {
                name: "Ada".into(),
                activities: vec![Activity::Swimming, Activity::TreePlanting],
            })
            .unwrap();
        assert_eq!(lines[0], "Citizen: Ada, Happiness: 50");
        assert_eq!(lines[3], "Ada is doing Tree Planting.");
        assert_eq!(city.citizens().get(0).unwrap().happiness(), 60);
    }

    #[test]
    fn participate_needs_a_citizen() {
        let mut city = City::default();
        assert!(city.participate(0, Activity::Gym).is_err());
    }

    #[test]
    fn list_all_groups_by_kind() {
        let mut city = City::default();
        city.add_power_source("Coaly", PowerSourceKind::Coal).unwrap();
        city.add_building("Flats", 90, BuildingKind::Residential).unwrap();
        let lines = city.list_all();
        assert_eq!(lines[0], "--- Buildings ---");
        assert_eq!(lines[1], "Residential: Flats, Energy: 90 kWh");
        assert_eq!(lines[3], "--- Buses ---");
        assert_eq!(lines[4], "--- Citizens ---");
        assert_eq!(lines[5], "--- Power Sources ---");
        assert_eq!(lines[6], "Coal Plant: Coaly");
    }

    #[test]
    fn listing_never_touches_state() {
        let mut city = City::default();
        city.add_car_and_drive("Taxi1", 10).unwrap();
        city.add_citizen("Ada").unwrap();
        let before = city.total_emissions();
        city.list_all();
        city.list_all();
        assert_eq!(city.total_emissions(), before);
        assert_eq!(city.citizens().get(0).unwrap().happiness(), 50);
    }
}
