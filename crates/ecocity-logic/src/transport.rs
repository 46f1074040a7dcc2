//! Transport: buses and cars.
//!
//! Every vehicle carries its own [`EmissionRates`], fixed at construction.
//! Diesel buses default to the standard diesel table but accept overrides;
//! overrides are not range-checked, so a negative rate yields negative
//! emissions.

use serde::{Deserialize, Serialize};

use crate::emissions::{Emission, EmissionRates};
use crate::entity::CityEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    ElectricBus,
    DieselBus,
    Car,
}

impl TransportKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::ElectricBus => "Electric Bus",
            Self::DieselBus => "Diesel Bus",
            Self::Car => "Car",
        }
    }

    /// Rates a vehicle of this kind gets unless overridden.
    pub fn default_rates(self) -> EmissionRates {
        match self {
            Self::ElectricBus => EmissionRates::ELECTRIC_BUS,
            Self::DieselBus => EmissionRates::DIESEL_BUS,
            Self::Car => EmissionRates::CAR,
        }
    }
}

/// Bus choices offered by the "add bus" command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusKind {
    Electric,
    Diesel,
}

impl From<BusKind> for TransportKind {
    fn from(kind: BusKind) -> Self {
        match kind {
            BusKind::Electric => TransportKind::ElectricBus,
            BusKind::Diesel => TransportKind::DieselBus,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transport {
    name: String,
    kind: TransportKind,
    rates: EmissionRates,
}

impl Transport {
    fn with_kind(name: impl Into<String>, kind: TransportKind) -> Self {
        Self {
            name: name.into(),
            kind,
            rates: kind.default_rates(),
        }
    }

    pub fn electric_bus(name: impl Into<String>) -> Self {
        Self::with_kind(name, TransportKind::ElectricBus)
    }

    pub fn diesel_bus(name: impl Into<String>) -> Self {
        Self::with_kind(name, TransportKind::DieselBus)
    }

    /// Diesel bus with caller-supplied rates.
    pub fn diesel_bus_with_rates(name: impl Into<String>, rates: EmissionRates) -> Self {
        Self {
            name: name.into(),
            kind: TransportKind::DieselBus,
            rates,
        }
    }

    pub fn car(name: impl Into<String>) -> Self {
        Self::with_kind(name, TransportKind::Car)
    }

    pub fn bus(name: impl Into<String>, kind: BusKind) -> Self {
        Self::with_kind(name, kind.into())
    }

    pub fn kind(&self) -> TransportKind {
        self.kind
    }

    pub fn rates(&self) -> EmissionRates {
        self.rates
    }

    /// Whether this vehicle's trips feed the emission totals.
    pub fn emits(&self) -> bool {
        self.kind != TransportKind::ElectricBus
    }

    /// Narration of the vehicle moving.
    pub fn travel(&self) -> String {
        match self.kind {
            TransportKind::ElectricBus => format!(
                "{} is gliding silently across town with zero emissions.",
                self.name
            ),
            TransportKind::DieselBus => format!("{} is belching fumes while moving.", self.name),
            TransportKind::Car => format!("{} is driving through the city.", self.name),
        }
    }

    /// Pollutants produced by driving `distance_km`.
    ///
    /// The caller is responsible for adding the result to the city totals.
    pub fn emit(&self, distance_km: i64) -> Emission {
        if self.kind == TransportKind::ElectricBus {
            return Emission::ZERO;
        }
        self.rates.emissions_for(distance_km)
    }
}

impl CityEntity for Transport {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        format!("{}: {}", self.kind.label(), self.name)
    }

    fn operate(&self) -> String {
        match self.kind {
            TransportKind::ElectricBus => format!("{} is running smoothly.", self.name),
            TransportKind::DieselBus => {
                format!("{} is running on diesel, emitting pollutants.", self.name)
            }
            TransportKind::Car => {
                format!("{} is driving on roads, emitting pollutants.", self.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electric_bus_never_emits() {
        let bus = Transport::electric_bus("E1");
        for d in [-10, 0, 1, 500] {
            assert_eq!(bus.emit(d), Emission::ZERO);
            assert!(bus.emit(d).sox.is_sign_positive());
        }
        assert!(!bus.emits());
    }

    #[test]
    fn diesel_bus_defaults() {
        let bus = Transport::diesel_bus("Bus1");
        assert_eq!(bus.rates(), EmissionRates::new(160, 0.5, 1.0));
        assert_eq!(bus.emit(20), Emission { cox: 3200, sox: 10.0, nox: 20.0 });
    }

    #[test]
    fn diesel_bus_overrides_are_unchecked() {
        let bus = Transport::diesel_bus_with_rates("Odd", EmissionRates::new(-10, -0.5, 2.0));
        let e = bus.emit(4);
        assert_eq!(e.cox, -40);
        assert_eq!(e.sox, -2.0);
        assert_eq!(e.nox, 8.0);
        assert_eq!(bus.kind(), TransportKind::DieselBus);
    }

    #[test]
    fn car_rates_fixed() {
        let car = Transport::car("Taxi1");
        let e = car.emit(10);
        assert_eq!(e.cox, 1400);
        assert_eq!(e.sox, 0.7 * 10.0);
        assert_eq!(e.nox, 1.3 * 10.0);
    }

    #[test]
    fn narration_per_kind() {
        let car = Transport::car("Taxi1");
        assert_eq!(car.describe(), "Car: Taxi1");
        assert_eq!(car.travel(), "Taxi1 is driving through the city.");
        assert_eq!(car.operate(), "Taxi1 is driving on roads, emitting pollutants.");

        let bus = Transport::bus("Line 4", BusKind::Diesel);
        assert_eq!(bus.describe(), "Diesel Bus: Line 4");
        assert_eq!(bus.travel(), "Line 4 is belching fumes while moving.");

        let ebus = Transport::bus("Volt", BusKind::Electric);
        assert_eq!(ebus.describe(), "Electric Bus: Volt");
        assert_eq!(ebus.operate(), "Volt is running smoothly.");
    }
}
