//! # Cable Selection
//!
//! Walks the ampacity column for a (material, installation method) pair in
//! ascending size order and picks the smallest cross-section that both
//! carries the design current after derating and stays within the 4%
//! voltage-drop limit for final circuits (SS 424 14 26 section 525).
//!
//! When no size satisfies both requirements the least-bad candidate is
//! returned with its failure flags set, so the caller can warn instead of
//! silently recommending a non-compliant cable.
//!
//! This is a satisficing search over the standard size sequence, not a
//! cost optimization.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::load::VoltageClass;
use crate::search::{first_or_best, SearchOutcome};
use crate::tables::{AmpacityColumn, DeratingFactors, InstallationMethod, Material};

/// Maximum voltage drop for final circuits (percent of supply voltage)
pub const MAX_VOLTAGE_DROP_PERCENT: f64 = 4.0;

/// One evaluated cross-section from the ampacity column.
///
/// Ephemeral: produced during selection, carried into the result for the
/// chosen size, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateCable {
    /// Position in the ampacity column (ascending size order)
    pub index: usize,
    /// Cross-section in mm²
    pub size_mm2: f64,
    /// Base ampacity at reference conditions (A)
    pub base_ampacity_a: f64,
    /// Ampacity after temperature and grouping derating (A)
    pub derated_ampacity_a: f64,
    /// Voltage drop over the run (V)
    pub voltage_drop_v: f64,
    /// Voltage drop as percent of supply voltage
    pub voltage_drop_percent: f64,
    /// Derated ampacity covers the design current
    pub current_sufficient: bool,
    /// Voltage drop within the 4% limit
    pub voltage_drop_acceptable: bool,
}

impl CandidateCable {
    /// Both requirements satisfied
    pub fn qualifies(&self) -> bool {
        self.current_sufficient && self.voltage_drop_acceptable
    }
}

/// Conditions shared by every candidate evaluation in one calculation.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext {
    pub design_current_a: f64,
    pub voltage: VoltageClass,
    pub length_m: f64,
    pub material: Material,
    pub derating: DeratingFactors,
}

impl EvaluationContext {
    /// Voltage-drop path coefficient: 2 for single-phase (out and back),
    /// √3 for a balanced three-phase run.
    fn drop_coefficient(&self) -> f64 {
        match self.voltage {
            VoltageClass::SinglePhase => 2.0,
            VoltageClass::ThreePhase => 3.0_f64.sqrt(),
        }
    }

    /// Evaluate one column entry against the design conditions.
    pub fn evaluate(&self, column: &AmpacityColumn, index: usize) -> CandidateCable {
        let size_mm2 = column.sizes_mm2[index];
        let base_ampacity_a = column.ampacities_a[index];
        let derated_ampacity_a = base_ampacity_a * self.derating.combined();

        let resistivity = self.material.resistivity_ohm_mm2_per_m();
        let voltage_drop_v =
            self.drop_coefficient() * self.length_m * self.design_current_a * resistivity
                / size_mm2;
        let voltage_drop_percent = voltage_drop_v / self.voltage.voltage_v() * 100.0;

        CandidateCable {
            index,
            size_mm2,
            base_ampacity_a,
            derated_ampacity_a,
            voltage_drop_v,
            voltage_drop_percent,
            current_sufficient: derated_ampacity_a >= self.design_current_a,
            voltage_drop_acceptable: voltage_drop_percent <= MAX_VOLTAGE_DROP_PERCENT,
        }
    }
}

/// Outcome of the cable walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableSelection {
    /// The chosen (or least-bad) candidate with its flags
    pub candidate: CandidateCable,
    /// True when both requirements were met; false for a degraded fallback
    pub qualified: bool,
}

/// Select the smallest qualifying cable, or the best approximation.
///
/// Fallback preference: any current-sufficient candidate beats an
/// insufficient one; among equally qualified candidates the lower drop
/// percent wins. Errors with NoCableAvailable only when the column has no
/// entries at all.
pub fn select_cable(
    column: &AmpacityColumn,
    material: Material,
    method: InstallationMethod,
    context: &EvaluationContext,
) -> CalcResult<CableSelection> {
    let candidates = (0..column.len()).map(|index| context.evaluate(column, index));

    let outcome = first_or_best(
        candidates,
        |candidate: &CandidateCable| candidate.qualifies(),
        |a, b| {
            (a.current_sufficient && !b.current_sufficient)
                || (a.current_sufficient == b.current_sufficient
                    && a.voltage_drop_percent < b.voltage_drop_percent)
        },
    )
    .ok_or_else(|| CalcError::no_cable_available(material.symbol(), method.code()))?;

    let qualified = outcome.is_qualified();
    let candidate = match outcome {
        SearchOutcome::Qualified(candidate) | SearchOutcome::Fallback(candidate) => candidate,
    };

    Ok(CableSelection {
        candidate,
        qualified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{AmpacityTable, Insulation};

    fn b1_copper() -> &'static AmpacityColumn {
        AmpacityTable::standard()
            .column(Material::Copper, InstallationMethod::B1)
            .unwrap()
    }

    fn context(current_a: f64, length_m: f64, grouping: u32) -> EvaluationContext {
        EvaluationContext {
            design_current_a: current_a,
            voltage: VoltageClass::SinglePhase,
            length_m,
            material: Material::Copper,
            derating: DeratingFactors::resolve(Insulation::Pvc, 30.0, grouping),
        }
    }

    #[test]
    fn test_baseline_16a_selects_2_5mm2() {
        // 16 A, 20 m, B1 copper, 30°C, single cable: derating 1.00.
        // 1.5 mm² carries the current but drops 4.17%; 2.5 mm² clears both.
        let ctx = context(16.0, 20.0, 1);
        let selection =
            select_cable(b1_copper(), Material::Copper, InstallationMethod::B1, &ctx).unwrap();

        assert!(selection.qualified);
        assert_eq!(selection.candidate.size_mm2, 2.5);
        assert!(selection.candidate.current_sufficient);
        assert!(selection.candidate.voltage_drop_acceptable);
        // drop = 2×20×16×0.0225/2.5 = 5.76 V = 2.50%
        assert!((selection.candidate.voltage_drop_v - 5.76).abs() < 1e-9);
        assert!((selection.candidate.voltage_drop_percent - 2.504).abs() < 0.01);
    }

    #[test]
    fn test_voltage_drop_forces_larger_size() {
        // Same current over 60 m: 2.5 mm² drops 7.5%, 4 mm² drops 4.7%,
        // 6 mm² drops 3.13%
        let ctx = context(16.0, 60.0, 1);
        let selection =
            select_cable(b1_copper(), Material::Copper, InstallationMethod::B1, &ctx).unwrap();

        assert!(selection.qualified);
        assert_eq!(selection.candidate.size_mm2, 6.0);
    }

    #[test]
    fn test_grouping_derating_escalates_selection() {
        // 9 grouped circuits: factor 0.50. 2.5 mm² derates to 15.5 A < 16 A,
        // 4 mm² derates to 21 A.
        let ctx = context(16.0, 20.0, 9);
        assert_eq!(ctx.derating.grouping, 0.50);

        let selection =
            select_cable(b1_copper(), Material::Copper, InstallationMethod::B1, &ctx).unwrap();
        assert!(selection.qualified);
        assert_eq!(selection.candidate.size_mm2, 4.0);
    }

    #[test]
    fn test_degraded_fallback_prefers_current_sufficiency() {
        // 400 A over 200 m: only 185 and 240 mm² carry the current and
        // both violate the 4% limit. The fallback must be
        // current-sufficient with the lowest drop, i.e. 240 mm².
        let ctx = context(400.0, 200.0, 1);
        let selection =
            select_cable(b1_copper(), Material::Copper, InstallationMethod::B1, &ctx).unwrap();

        assert!(!selection.qualified);
        assert!(selection.candidate.current_sufficient);
        assert!(!selection.candidate.voltage_drop_acceptable);
        assert_eq!(selection.candidate.size_mm2, 240.0);
    }

    #[test]
    fn test_degraded_fallback_when_no_size_carries_current() {
        // 600 A exceeds every copper B1 ampacity; among equally
        // insufficient candidates the lowest drop percent wins.
        let ctx = context(600.0, 5.0, 1);
        let selection =
            select_cable(b1_copper(), Material::Copper, InstallationMethod::B1, &ctx).unwrap();

        assert!(!selection.qualified);
        assert!(!selection.candidate.current_sufficient);
        assert_eq!(selection.candidate.size_mm2, 240.0);
    }

    #[test]
    fn test_drop_percent_strictly_decreases_with_size() {
        let ctx = context(16.0, 20.0, 1);
        let column = b1_copper();
        let mut previous = f64::INFINITY;
        for index in 0..column.len() {
            let candidate = ctx.evaluate(column, index);
            assert!(candidate.voltage_drop_percent < previous);
            previous = candidate.voltage_drop_percent;
        }
    }

    #[test]
    fn test_selection_monotonic_in_current() {
        let column = b1_copper();
        let mut previous_size = 0.0;
        for current in [6.0, 10.0, 16.0, 25.0, 40.0, 63.0, 100.0] {
            let ctx = context(current, 20.0, 1);
            let selection =
                select_cable(column, Material::Copper, InstallationMethod::B1, &ctx).unwrap();
            assert!(
                selection.candidate.size_mm2 >= previous_size,
                "size shrank when current rose to {} A",
                current
            );
            previous_size = selection.candidate.size_mm2;
        }
    }

    #[test]
    fn test_selection_never_leaves_table_bounds() {
        let column = b1_copper();
        for current in [0.5, 16.0, 250.0, 800.0] {
            let ctx = context(current, 10.0, 1);
            let selection =
                select_cable(column, Material::Copper, InstallationMethod::B1, &ctx).unwrap();
            assert!(selection.candidate.size_mm2 >= column.sizes_mm2[0]);
            assert!(selection.candidate.size_mm2 <= *column.sizes_mm2.last().unwrap());
        }
    }

    #[test]
    fn test_three_phase_drop_coefficient() {
        let ctx = EvaluationContext {
            design_current_a: 16.0,
            voltage: VoltageClass::ThreePhase,
            length_m: 20.0,
            material: Material::Copper,
            derating: DeratingFactors::resolve(Insulation::Pvc, 30.0, 1),
        };
        let candidate = ctx.evaluate(b1_copper(), 1);
        let expected = 3.0_f64.sqrt() * 20.0 * 16.0 * 0.0225 / 2.5;
        assert!((candidate.voltage_drop_v - expected).abs() < 1e-9);
        assert!((candidate.voltage_drop_percent - expected / 400.0 * 100.0).abs() < 1e-9);
    }
}
