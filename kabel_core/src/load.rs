//! # Load Resolution
//!
//! Converts the user-supplied load description into a design current.
//!
//! Loads are entered either as power (kW with a power factor) or directly
//! as current (A). Power converts per the supply class:
//!
//! ```text
//! single-phase: I = P·1000 / (U × cos φ)
//! three-phase:  I = P·1000 / (√3 × U × cos φ)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kabel_core::load::{LoadInput, VoltageClass};
//!
//! let load = LoadInput::Power {
//!     power_kw: 3.68,
//!     power_factor: 1.0,
//! };
//! let current = load.design_current_a(VoltageClass::SinglePhase).unwrap();
//! assert!((current - 16.0).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supply voltage class for Swedish low-voltage installations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VoltageClass {
    /// 230 V single-phase
    #[default]
    SinglePhase,
    /// 400 V three-phase
    ThreePhase,
}

impl VoltageClass {
    /// All voltage classes for UI selection
    pub const ALL: [VoltageClass; 2] = [VoltageClass::SinglePhase, VoltageClass::ThreePhase];

    /// Nominal supply voltage in volts
    pub fn voltage_v(&self) -> f64 {
        match self {
            VoltageClass::SinglePhase => 230.0,
            VoltageClass::ThreePhase => 400.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            VoltageClass::SinglePhase => "230 V (1-phase)",
            VoltageClass::ThreePhase => "400 V (3-phase)",
        }
    }
}

impl std::fmt::Display for VoltageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the load is specified: power plus power factor, or current directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum LoadInput {
    /// Active power in kW with power factor cos φ
    Power { power_kw: f64, power_factor: f64 },
    /// Load current in amperes, used unmodified
    Current { current_a: f64 },
}

impl LoadInput {
    /// Validate the load description.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            LoadInput::Power {
                power_kw,
                power_factor,
            } => {
                if *power_kw < 0.0 {
                    return Err(CalcError::invalid_input(
                        "power_kw",
                        power_kw.to_string(),
                        "Power must be non-negative",
                    ));
                }
                if *power_factor <= 0.0 || *power_factor > 1.0 {
                    return Err(CalcError::invalid_input(
                        "power_factor",
                        power_factor.to_string(),
                        "Power factor must be in (0, 1]",
                    ));
                }
            }
            LoadInput::Current { current_a } => {
                if *current_a < 0.0 {
                    return Err(CalcError::invalid_input(
                        "current_a",
                        current_a.to_string(),
                        "Current must be non-negative",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Resolve the design current in amperes for the given supply class.
    pub fn design_current_a(&self, voltage: VoltageClass) -> CalcResult<f64> {
        self.validate()?;
        let current = match self {
            LoadInput::Power {
                power_kw,
                power_factor,
            } => {
                let watts = power_kw * 1000.0;
                match voltage {
                    VoltageClass::SinglePhase => watts / (voltage.voltage_v() * power_factor),
                    VoltageClass::ThreePhase => {
                        watts / (3.0_f64.sqrt() * voltage.voltage_v() * power_factor)
                    }
                }
            }
            LoadInput::Current { current_a } => *current_a,
        };
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_phase_power() {
        // I = 2300 W / (230 V × 1.0) = 10 A
        let load = LoadInput::Power {
            power_kw: 2.3,
            power_factor: 1.0,
        };
        let current = load.design_current_a(VoltageClass::SinglePhase).unwrap();
        assert!((current - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_phase_power() {
        // I = 11000 W / (√3 × 400 V × 0.8) ≈ 19.85 A
        let load = LoadInput::Power {
            power_kw: 11.0,
            power_factor: 0.8,
        };
        let current = load.design_current_a(VoltageClass::ThreePhase).unwrap();
        let expected = 11_000.0 / (3.0_f64.sqrt() * 400.0 * 0.8);
        assert!((current - expected).abs() < 1e-9);
    }

    #[test]
    fn test_direct_current_passthrough() {
        let load = LoadInput::Current { current_a: 16.0 };
        assert_eq!(
            load.design_current_a(VoltageClass::SinglePhase).unwrap(),
            16.0
        );
        assert_eq!(
            load.design_current_a(VoltageClass::ThreePhase).unwrap(),
            16.0
        );
    }

    #[test]
    fn test_rejects_negative_power() {
        let load = LoadInput::Power {
            power_kw: -1.0,
            power_factor: 0.9,
        };
        assert!(matches!(
            load.design_current_a(VoltageClass::SinglePhase),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_power_factor() {
        for pf in [0.0, -0.5, 1.1] {
            let load = LoadInput::Power {
                power_kw: 2.0,
                power_factor: pf,
            };
            assert!(load.design_current_a(VoltageClass::SinglePhase).is_err());
        }
    }

    #[test]
    fn test_rejects_negative_current() {
        let load = LoadInput::Current { current_a: -0.1 };
        assert!(load.design_current_a(VoltageClass::SinglePhase).is_err());
    }

    #[test]
    fn test_serialization() {
        let load = LoadInput::Power {
            power_kw: 3.68,
            power_factor: 0.95,
        };
        let json = serde_json::to_string(&load).unwrap();
        let parsed: LoadInput = serde_json::from_str(&json).unwrap();
        assert_eq!(load, parsed);
    }
}
