//! Pure emission logic: per-vehicle rates and running totals.
//!
//! Rates are grams per kilometre. Carbon oxides are tracked as whole grams
//! (integer rate × integer distance); sulphur and nitrogen oxides are real.
//!
//! ```
//! use ecocity_logic::emissions::{EmissionRates, EmissionTotals};
//!
//! let trip = EmissionRates::CAR.emissions_for(10);
//! assert_eq!(trip.cox, 1400);
//!
//! let mut totals = EmissionTotals::new();
//! totals.record(&trip);
//! assert_eq!(totals.snapshot(), trip);
//! ```

use serde::{Deserialize, Serialize};

/// Emission rates of one vehicle, in g/km.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionRates {
    pub cox: i64,
    pub sox: f64,
    pub nox: f64,
}

impl EmissionRates {
    pub const ELECTRIC_BUS: Self = Self::new(0, 0.0, 0.0);
    pub const DIESEL_BUS: Self = Self::new(160, 0.5, 1.0);
    pub const CAR: Self = Self::new(140, 0.7, 1.3);

    pub const fn new(cox: i64, sox: f64, nox: f64) -> Self {
        Self { cox, sox, nox }
    }

    /// Pollutant mass produced over `distance_km`.
    ///
    /// Zero and negative distances are not rejected; they scale the
    /// rates like any other distance. Carbon oxides wrap on overflow.
    pub fn emissions_for(&self, distance_km: i64) -> Emission {
        let km = distance_km as f64;
        Emission {
            cox: self.cox.wrapping_mul(distance_km),
            sox: self.sox * km,
            nox: self.nox * km,
        }
    }
}

/// Pollutant mass in grams, either from one trip or accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Emission {
    pub cox: i64,
    pub sox: f64,
    pub nox: f64,
}

impl Emission {
    pub const ZERO: Self = Self {
        cox: 0,
        sox: 0.0,
        nox: 0.0,
    };

    /// Narration printed after a trip.
    pub fn trip_lines(&self) -> Vec<String> {
        vec![
            format!("COX emission produced: {} g/km", self.cox),
            format!("SOX emission produced: {:.2} g/km", self.sox),
            format!("NOX emission produced: {:.2} g/km", self.nox),
        ]
    }
}

/// Running totals across every trip of the run. Never reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmissionTotals {
    total_cox: i64,
    total_sox: f64,
    total_nox: f64,
}

impl EmissionTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, cox: i64, sox: f64, nox: f64) {
        self.total_cox = self.total_cox.wrapping_add(cox);
        self.total_sox += sox;
        self.total_nox += nox;
    }

    pub fn record(&mut self, emission: &Emission) {
        self.add(emission.cox, emission.sox, emission.nox);
    }

    pub fn snapshot(&self) -> Emission {
        Emission {
            cox: self.total_cox,
            sox: self.total_sox,
            nox: self.total_nox,
        }
    }

    /// Two-decimal report of the totals.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            "--- Total Emissions ---".to_string(),
            format!("COX: {} g", self.total_cox),
            format!("SOX: {:.2} g", self.total_sox),
            format!("NOX: {:.2} g", self.total_nox),
        ]
    }
}
