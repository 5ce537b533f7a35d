//! # Residual-Current Protection
//!
//! Maps the application category to an RCD (jordfelsbrytare) requirement
//! per SS 436 40 00. Socket outlets, bathrooms, and outdoor circuits make
//! the RCD mandatory (sections 411.3.3 / 701.411.3.3); other categories
//! get a recommendation.
//!
//! The design current matters only for motors: above 32 A the recommended
//! sensitivity switches from 30 mA to 300 mA time-delayed to avoid
//! nuisance tripping on starting current.

use serde::{Deserialize, Serialize};

/// Motor design current above which the recommended RCD moves to 300 mA
/// time-delayed
pub const MOTOR_SENSITIVITY_THRESHOLD_A: f64 = 32.0;

/// Circuit application category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Application {
    /// Socket outlets
    #[default]
    Socket,
    /// Fixed lighting
    Lighting,
    /// Fixed (hard-wired) appliance
    FixedAppliance,
    /// Bathroom / wet area
    Bathroom,
    /// Outdoor circuit
    Outdoor,
    /// Motor load
    Motor,
    /// Distribution board feeder
    Distribution,
    /// Anything else
    Other,
}

impl Application {
    /// All application categories for UI selection
    pub const ALL: [Application; 8] = [
        Application::Socket,
        Application::Lighting,
        Application::FixedAppliance,
        Application::Bathroom,
        Application::Outdoor,
        Application::Motor,
        Application::Distribution,
        Application::Other,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Application::Socket => "Socket outlets",
            Application::Lighting => "Lighting",
            Application::FixedAppliance => "Fixed appliance",
            Application::Bathroom => "Bathroom / wet area",
            Application::Outdoor => "Outdoor",
            Application::Motor => "Motor",
            Application::Distribution => "Distribution board",
            Application::Other => "Other",
        }
    }
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// RCD waveform-detection class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RcdClass {
    /// Type AC: sinusoidal residual currents only
    Ac,
    /// Type A: also pulsating DC residual currents (electronic loads)
    A,
}

impl RcdClass {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RcdClass::Ac => "Type AC",
            RcdClass::A => "Type A",
        }
    }
}

impl std::fmt::Display for RcdClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// RCD requirement record for a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcdRequirement {
    /// Required by the standard (vs. recommended)
    pub mandatory: bool,
    /// Trip sensitivity in milliamperes
    pub sensitivity_ma: u32,
    /// Waveform-detection class
    pub class: RcdClass,
    /// Time-delayed (S-type) device recommended
    pub time_delayed: bool,
    /// Human-readable rationale with the standard reference
    pub rationale: String,
}

/// Classify the RCD requirement for an application category.
///
/// Fixed policy table, not derived; `design_current_a` only affects the
/// motor category.
pub fn classify_rcd(application: Application, design_current_a: f64) -> RcdRequirement {
    match application {
        Application::Socket => RcdRequirement {
            mandatory: true,
            sensitivity_ma: 30,
            class: RcdClass::A,
            time_delayed: false,
            rationale: "Mandatory for socket outlets per SS 436 40 00 section 411.3.3; \
                        Type A recommended for modern electronic loads."
                .to_string(),
        },
        Application::Lighting => RcdRequirement {
            mandatory: false,
            sensitivity_ma: 30,
            class: RcdClass::Ac,
            time_delayed: false,
            rationale: "Not mandatory for lighting, but 30 mA protection is recommended."
                .to_string(),
        },
        Application::FixedAppliance => RcdRequirement {
            mandatory: false,
            sensitivity_ma: 30,
            class: RcdClass::A,
            time_delayed: false,
            rationale: "Recommended for fixed installations, especially with electronic \
                        components."
                .to_string(),
        },
        Application::Bathroom => RcdRequirement {
            mandatory: true,
            sensitivity_ma: 30,
            class: RcdClass::A,
            time_delayed: false,
            rationale: "Mandatory for bathrooms per SS 436 40 00 section 701.411.3.3; all \
                        bathroom equipment must be protected."
                .to_string(),
        },
        Application::Outdoor => RcdRequirement {
            mandatory: true,
            sensitivity_ma: 30,
            class: RcdClass::A,
            time_delayed: false,
            rationale: "Mandatory for outdoor circuits per SS 436 40 00 section 411.3.3."
                .to_string(),
        },
        Application::Motor => {
            if design_current_a > MOTOR_SENSITIVITY_THRESHOLD_A {
                RcdRequirement {
                    mandatory: false,
                    sensitivity_ma: 300,
                    class: RcdClass::A,
                    time_delayed: true,
                    rationale: "Motors above 32 A: 300 mA time-delayed (S-type) to avoid \
                                nuisance tripping on starting current."
                        .to_string(),
                }
            } else {
                RcdRequirement {
                    mandatory: false,
                    sensitivity_ma: 30,
                    class: RcdClass::A,
                    time_delayed: false,
                    rationale: "Smaller motors: 30 mA Type A; consider time delay if the \
                                starting current is high."
                        .to_string(),
                }
            }
        }
        Application::Distribution => RcdRequirement {
            mandatory: false,
            sensitivity_ma: 300,
            class: RcdClass::A,
            time_delayed: true,
            rationale: "Distribution feeders: 100-300 mA Type A selective (S) for \
                        discrimination with downstream 30 mA devices."
                .to_string(),
        },
        Application::Other => RcdRequirement {
            mandatory: false,
            sensitivity_ma: 30,
            class: RcdClass::Ac,
            time_delayed: false,
            rationale: "Standard protection for residential and commercial premises."
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_categories() {
        for application in [Application::Socket, Application::Bathroom, Application::Outdoor] {
            let rcd = classify_rcd(application, 10.0);
            assert!(rcd.mandatory, "{} should be mandatory", application);
            assert_eq!(rcd.sensitivity_ma, 30);
            assert_eq!(rcd.class, RcdClass::A);
        }
    }

    #[test]
    fn test_bathroom_mandatory_regardless_of_current() {
        for current in [1.0, 16.0, 400.0] {
            let rcd = classify_rcd(Application::Bathroom, current);
            assert!(rcd.mandatory);
            assert_eq!(rcd.sensitivity_ma, 30);
        }
    }

    #[test]
    fn test_lighting_optional_type_ac() {
        let rcd = classify_rcd(Application::Lighting, 10.0);
        assert!(!rcd.mandatory);
        assert_eq!(rcd.class, RcdClass::Ac);
    }

    #[test]
    fn test_motor_threshold() {
        let small = classify_rcd(Application::Motor, 20.0);
        assert_eq!(small.sensitivity_ma, 30);
        assert!(!small.time_delayed);

        // exactly at the threshold stays at 30 mA
        let at_threshold = classify_rcd(Application::Motor, 32.0);
        assert_eq!(at_threshold.sensitivity_ma, 30);

        let large = classify_rcd(Application::Motor, 40.0);
        assert!(!large.mandatory);
        assert_eq!(large.sensitivity_ma, 300);
        assert!(large.time_delayed);
    }

    #[test]
    fn test_distribution_selective() {
        let rcd = classify_rcd(Application::Distribution, 63.0);
        assert!(!rcd.mandatory);
        assert_eq!(rcd.sensitivity_ma, 300);
        assert!(rcd.time_delayed);
    }

    #[test]
    fn test_other_default() {
        let rcd = classify_rcd(Application::Other, 16.0);
        assert!(!rcd.mandatory);
        assert_eq!(rcd.sensitivity_ma, 30);
        assert_eq!(rcd.class, RcdClass::Ac);
    }

    #[test]
    fn test_serialization() {
        let rcd = classify_rcd(Application::Motor, 40.0);
        let json = serde_json::to_string(&rcd).unwrap();
        let parsed: RcdRequirement = serde_json::from_str(&json).unwrap();
        assert_eq!(rcd, parsed);
    }
}
