//! # Sizing Calculations
//!
//! The selection pipeline: load resolution, derating, cable selection,
//! breaker coordination, and RCD classification, run strictly in that
//! order. Each calculation is stateless, synchronous, and idempotent -
//! identical inputs always produce identical results.
//!
//! Each stage follows the pattern:
//!
//! - `*Input` / context - parameters (JSON-serializable)
//! - `*Selection` / record - results (JSON-serializable)
//! - pure function returning `CalcResult`
//!
//! ## Modules
//!
//! - [`cable`] - Joint ampacity/voltage-drop cable selection
//! - [`breaker`] - Ib ≤ In ≤ Iz coordination with size escalation
//! - [`protection`] - RCD requirement classification
//!
//! ## Example
//!
//! ```rust
//! use kabel_core::calculations::{select_protection, SizingInput};
//! use kabel_core::calculations::protection::Application;
//! use kabel_core::load::{LoadInput, VoltageClass};
//! use kabel_core::recommendations::Environment;
//! use kabel_core::tables::{InstallationMethod, Insulation, Material};
//!
//! let input = SizingInput {
//!     voltage: VoltageClass::SinglePhase,
//!     load: LoadInput::Current { current_a: 16.0 },
//!     length_m: 20.0,
//!     method: InstallationMethod::B1,
//!     material: Material::Copper,
//!     insulation: Insulation::Pvc,
//!     ambient_temp_c: 30.0,
//!     grouping: 1,
//!     application: Application::Socket,
//!     environment: Environment::Indoor,
//! };
//!
//! let result = select_protection(&input).unwrap();
//! assert_eq!(result.cable.size_mm2, 2.5);
//! assert_eq!(result.breaker_rating_a, 16);
//! ```

pub mod breaker;
pub mod cable;
pub mod protection;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::load::{LoadInput, VoltageClass};
use crate::recommendations::{Environment, Recommendations};
use crate::tables::{
    AmpacityTable, DeratingFactors, InstallationMethod, Insulation, Material,
};

// Re-export commonly used types
pub use breaker::{coordinate_breaker, BreakerSelection};
pub use cable::{select_cable, CableSelection, CandidateCable, EvaluationContext};
pub use protection::{classify_rcd, Application, RcdClass, RcdRequirement};

/// Disclaimer attached to every rendered result.
pub const ADVISORY_NOTE: &str =
    "Advisory calculation only - not a substitute for design by a qualified electrician.";

/// Complete description of one sizing request.
///
/// The upstream form/validator guarantees the enumerated fields; the core
/// re-checks only the numeric domains it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    /// Supply class: 230 V single-phase or 400 V three-phase
    pub voltage: VoltageClass,
    /// Load as power + power factor, or current directly
    pub load: LoadInput,
    /// Cable run length in metres
    pub length_m: f64,
    /// Installation method per Tabell 52B.1
    pub method: InstallationMethod,
    /// Conductor material
    pub material: Material,
    /// Insulation class (selects the temperature-factor table)
    pub insulation: Insulation,
    /// Ambient temperature in °C
    pub ambient_temp_c: f64,
    /// Number of loaded circuits grouped together (≥ 1)
    pub grouping: u32,
    /// Application category for RCD classification
    pub application: Application,
    /// Installation environment
    pub environment: Environment,
}

impl SizingInput {
    /// Validate the numeric input domains.
    pub fn validate(&self) -> CalcResult<()> {
        self.load.validate()?;
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Cable length must be positive",
            ));
        }
        if self.grouping < 1 {
            return Err(CalcError::invalid_input(
                "grouping",
                self.grouping.to_string(),
                "Grouping count must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Final recommendation for one request.
///
/// Constructed once per calculation, immutable afterwards. Degraded
/// outcomes are flagged, never silently dropped: `cable_qualified` covers
/// the ampacity/voltage-drop search, `breaker_coordinated` the
/// Ib ≤ In ≤ Iz rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    /// Resolved design current Ib (A)
    pub design_current_a: f64,
    /// Temperature and grouping factors applied
    pub derating: DeratingFactors,
    /// Final cable with base/derated ampacity and voltage-drop figures
    /// (post-escalation when the coordinator raised the size)
    pub cable: CandidateCable,
    /// The selector found a cable meeting both current and voltage-drop
    /// requirements
    pub cable_qualified: bool,
    /// Size was raised beyond the selector's optimum to satisfy breaker
    /// coordination
    pub escalated_for_breaker: bool,
    /// Chosen breaker rating In (A)
    pub breaker_rating_a: u32,
    /// Ib ≤ In ≤ Iz holds for the final cable
    pub breaker_coordinated: bool,
    /// Residual-current protection requirement
    pub rcd: RcdRequirement,
    /// Advisory extras: construction, designation, breaking capacity,
    /// purchase length
    pub recommendations: Recommendations,
}

impl SizingResult {
    /// Every requirement met without degradation
    pub fn is_fully_compliant(&self) -> bool {
        self.cable_qualified && self.breaker_coordinated
    }
}

/// Run the full selection pipeline against the standard reference tables.
///
/// See [`select_protection_with_table`] for injecting custom tables.
pub fn select_protection(input: &SizingInput) -> CalcResult<SizingResult> {
    select_protection_with_table(AmpacityTable::standard(), input)
}

/// Run the full selection pipeline against a caller-provided ampacity
/// table.
///
/// Strictly sequential: load → derating → cable → breaker → RCD. No I/O,
/// no shared mutable state.
pub fn select_protection_with_table(
    table: &AmpacityTable,
    input: &SizingInput,
) -> CalcResult<SizingResult> {
    input.validate()?;

    let design_current_a = input.load.design_current_a(input.voltage)?;
    let derating = DeratingFactors::resolve(input.insulation, input.ambient_temp_c, input.grouping);

    let column = table.column(input.material, input.method).ok_or_else(|| {
        CalcError::no_cable_available(input.material.symbol(), input.method.code())
    })?;

    let context = EvaluationContext {
        design_current_a,
        voltage: input.voltage,
        length_m: input.length_m,
        material: input.material,
        derating,
    };

    let selection = select_cable(column, input.material, input.method, &context)?;
    let breaker = coordinate_breaker(column, selection.candidate.index, &context)?;
    let rcd = classify_rcd(input.application, design_current_a);

    let recommendations = Recommendations::build(
        breaker.cable.size_mm2,
        input.voltage,
        input.method,
        input.application,
        input.environment,
        input.length_m,
    );

    Ok(SizingResult {
        design_current_a,
        derating,
        cable: breaker.cable,
        cable_qualified: selection.qualified,
        escalated_for_breaker: breaker.escalated,
        breaker_rating_a: breaker.rating_a,
        breaker_coordinated: breaker.coordinated,
        rcd,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::CableConstruction;

    fn baseline_input() -> SizingInput {
        SizingInput {
            voltage: VoltageClass::SinglePhase,
            load: LoadInput::Current { current_a: 16.0 },
            length_m: 20.0,
            method: InstallationMethod::B1,
            material: Material::Copper,
            insulation: Insulation::Pvc,
            ambient_temp_c: 30.0,
            grouping: 1,
            application: Application::Socket,
            environment: Environment::Indoor,
        }
    }

    #[test]
    fn test_baseline_16a_single_phase() {
        let result = select_protection(&baseline_input()).unwrap();

        assert!((result.design_current_a - 16.0).abs() < 1e-9);
        assert_eq!(result.derating.temperature, 1.00);
        assert_eq!(result.derating.grouping, 1.00);
        // 2.5 mm² clears both 16 A and the 4% drop at 20 m
        assert_eq!(result.cable.size_mm2, 2.5);
        assert!(result.cable_qualified);
        // Ib ≤ In ≤ Iz
        assert!(result.breaker_coordinated);
        assert!(result.breaker_rating_a as f64 >= result.design_current_a);
        assert!(result.breaker_rating_a as f64 <= result.cable.derated_ampacity_a);
        assert!(result.is_fully_compliant());
    }

    #[test]
    fn test_grouping_eight_applies_052_factor() {
        let input = SizingInput {
            grouping: 8,
            ..baseline_input()
        };
        let result = select_protection(&input).unwrap();

        assert_eq!(result.derating.grouping, 0.52);
        // 2.5 mm² derates to 16.12 A, still just covering 16 A
        assert!((result.cable.derated_ampacity_a - 16.12).abs() < 1e-9);
        assert!(result.cable.size_mm2 >= 2.5);
        assert!(result.cable.derated_ampacity_a < result.cable.base_ampacity_a);
    }

    #[test]
    fn test_grouping_escalates_cable_size() {
        // 18 A with grouping 8: the selector lands on 4 mm² (2.5 mm²
        // derates below 18 A) and the 20 A breaker coordinates there.
        let input = SizingInput {
            load: LoadInput::Current { current_a: 18.0 },
            grouping: 8,
            ..baseline_input()
        };
        let result = select_protection(&input).unwrap();
        let baseline = select_protection(&baseline_input()).unwrap();

        assert!(result.cable.size_mm2 > baseline.cable.size_mm2);
        assert!(result.breaker_coordinated);
    }

    #[test]
    fn test_bathroom_rcd_mandatory() {
        let input = SizingInput {
            application: Application::Bathroom,
            ..baseline_input()
        };
        let result = select_protection(&input).unwrap();

        assert!(result.rcd.mandatory);
        assert_eq!(result.rcd.sensitivity_ma, 30);
        assert_eq!(result.rcd.class, RcdClass::A);
    }

    #[test]
    fn test_motor_above_threshold_gets_time_delayed_rcd() {
        let input = SizingInput {
            load: LoadInput::Current { current_a: 40.0 },
            application: Application::Motor,
            ..baseline_input()
        };
        let result = select_protection(&input).unwrap();

        assert!(!result.rcd.mandatory);
        assert_eq!(result.rcd.sensitivity_ma, 300);
        assert!(result.rcd.time_delayed);
        assert_eq!(result.recommendations.construction, CableConstruction::Xlpe);
    }

    #[test]
    fn test_ambient_above_table_domain_clamps() {
        // PVC table ends at 60°C -> factor 0.50, no extrapolation
        let input = SizingInput {
            ambient_temp_c: 65.0,
            ..baseline_input()
        };
        let result = select_protection(&input).unwrap();
        assert_eq!(result.derating.temperature, 0.50);
    }

    #[test]
    fn test_idempotence() {
        let input = baseline_input();
        let first = select_protection(&input).unwrap();
        let second = select_protection(&input).unwrap();
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_power_input_resolves_before_selection() {
        // 3.68 kW at cos φ 1.0 on 230 V is 16 A, so the result matches
        // the direct-current baseline.
        let input = SizingInput {
            load: LoadInput::Power {
                power_kw: 3.68,
                power_factor: 1.0,
            },
            ..baseline_input()
        };
        let result = select_protection(&input).unwrap();
        let baseline = select_protection(&baseline_input()).unwrap();

        assert!((result.design_current_a - 16.0).abs() < 1e-9);
        assert_eq!(result.cable.size_mm2, baseline.cable.size_mm2);
        assert_eq!(result.breaker_rating_a, baseline.breaker_rating_a);
    }

    #[test]
    fn test_rejects_nonpositive_length() {
        let input = SizingInput {
            length_m: 0.0,
            ..baseline_input()
        };
        assert!(matches!(
            select_protection(&input),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_grouping() {
        let input = SizingInput {
            grouping: 0,
            ..baseline_input()
        };
        assert!(matches!(
            select_protection(&input),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_missing_table_pair_is_no_cable_available() {
        let table = AmpacityTable::from_columns(vec![(
            (Material::Copper, InstallationMethod::A1),
            (vec![1.5, 2.5], vec![19.0, 26.0]),
        )])
        .unwrap();

        let result = select_protection_with_table(&table, &baseline_input());
        assert!(matches!(result, Err(CalcError::NoCableAvailable { .. })));
    }

    #[test]
    fn test_degraded_result_is_flagged_not_errored() {
        // 400 A over 200 m: every size violates the drop limit
        let input = SizingInput {
            load: LoadInput::Current { current_a: 400.0 },
            length_m: 200.0,
            ..baseline_input()
        };
        let result = select_protection(&input).unwrap();

        assert!(!result.cable_qualified);
        assert!(!result.is_fully_compliant());
        assert!(!result.cable.voltage_drop_acceptable);
    }

    #[test]
    fn test_result_serialization_roundtrip() {
        let result = select_protection(&baseline_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: SizingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }
}
