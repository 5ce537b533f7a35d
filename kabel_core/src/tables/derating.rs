//! # Derating Factors
//!
//! Temperature correction factors per SS 424 14 26 Tabell 52B.14 and
//! grouping factors per Tabell 52B.17.
//!
//! Derated ampacity = base ampacity × temperature factor × grouping factor.
//!
//! ## Lookup Semantics
//!
//! - Temperature: nearest table key by absolute difference; ties break
//!   toward the first entry in ascending key order; temperatures outside
//!   the table domain clamp to the nearest boundary key (no extrapolation).
//! - Grouping: exact match only. Counts absent from the table (10, 11,
//!   13-15, 17-19, >20) map to a neutral 1.0. Known limitation carried
//!   over from the source tables; no interpolation is attempted.

use serde::{Deserialize, Serialize};

use crate::tables::Insulation;

/// Temperature correction factors for PVC insulation (Tabell 52B.14).
/// Keys in °C, ascending; table domain ends at 60°C.
const PVC_TEMP_FACTORS: &[(f64, f64)] = &[
    (10.0, 1.22),
    (15.0, 1.17),
    (20.0, 1.12),
    (25.0, 1.06),
    (30.0, 1.00),
    (35.0, 0.94),
    (40.0, 0.87),
    (45.0, 0.79),
    (50.0, 0.71),
    (55.0, 0.61),
    (60.0, 0.50),
];

/// Temperature correction factors for PEX/XLPE insulation (Tabell 52B.14).
const PEX_TEMP_FACTORS: &[(f64, f64)] = &[
    (10.0, 1.15),
    (15.0, 1.12),
    (20.0, 1.08),
    (25.0, 1.04),
    (30.0, 1.00),
    (35.0, 0.96),
    (40.0, 0.91),
    (45.0, 0.87),
    (50.0, 0.82),
    (55.0, 0.76),
    (60.0, 0.71),
    (65.0, 0.65),
    (70.0, 0.58),
    (75.0, 0.50),
    (80.0, 0.41),
];

/// Grouping factors for multiple loaded circuits (Tabell 52B.17).
const GROUPING_FACTORS: &[(u32, f64)] = &[
    (1, 1.00),
    (2, 0.80),
    (3, 0.70),
    (4, 0.65),
    (5, 0.60),
    (6, 0.57),
    (7, 0.54),
    (8, 0.52),
    (9, 0.50),
    (12, 0.45),
    (16, 0.41),
    (20, 0.38),
];

impl Insulation {
    /// The (temperature °C, factor) table for this insulation class
    pub fn temperature_factors(&self) -> &'static [(f64, f64)] {
        match self {
            Insulation::Pvc => PVC_TEMP_FACTORS,
            Insulation::Pex => PEX_TEMP_FACTORS,
        }
    }
}

/// Temperature correction factor for an insulation class at a given ambient
/// temperature.
///
/// Bounded walk over the ascending key sequence; the strict `<` comparison
/// keeps the first-encountered key on ties, and out-of-domain temperatures
/// settle on the nearest boundary key.
pub fn temperature_factor(insulation: Insulation, ambient_temp_c: f64) -> f64 {
    let table = insulation.temperature_factors();
    let mut best = table[0];
    for entry in table {
        if (entry.0 - ambient_temp_c).abs() < (best.0 - ambient_temp_c).abs() {
            best = *entry;
        }
    }
    best.1
}

/// Grouping factor for a number of loaded circuits run together.
///
/// Exact match only; unlisted counts return a neutral 1.0.
pub fn grouping_factor(grouping: u32) -> f64 {
    GROUPING_FACTORS
        .iter()
        .find(|(count, _)| *count == grouping)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

/// Combined derating for a calculation, with the individual factors kept
/// for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeratingFactors {
    /// Temperature correction factor (Tabell 52B.14)
    pub temperature: f64,
    /// Grouping factor (Tabell 52B.17)
    pub grouping: f64,
}

impl DeratingFactors {
    /// Resolve both factors for the given conditions
    pub fn resolve(insulation: Insulation, ambient_temp_c: f64, grouping: u32) -> Self {
        Self {
            temperature: temperature_factor(insulation, ambient_temp_c),
            grouping: grouping_factor(grouping),
        }
    }

    /// Combined multiplicative factor applied to base ampacity
    pub fn combined(&self) -> f64 {
        self.temperature * self.grouping
    }
}
