//! # Cable Recommendations
//!
//! Advisory extras beyond the core sizing result: which cable construction
//! suits the environment and application, the Swedish designation strings
//! stocked by suppliers (H07V-K, AXQJ, EQLQ, ...), breaker breaking-capacity
//! advice, and the purchase length with slack.
//!
//! Product availability varies; everything here is advisory and should be
//! confirmed with the supplier.

use serde::{Deserialize, Serialize};

use crate::calculations::protection::Application;
use crate::load::VoltageClass;
use crate::tables::InstallationMethod;

/// Extra cable length bought beyond the measured run (10% slack)
pub const PURCHASE_SLACK_FACTOR: f64 = 1.1;

/// Installation environment, used for construction choice and a sensible
/// default ambient temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Environment {
    /// Heated indoor space
    #[default]
    Indoor,
    /// Outdoors, Swedish climate
    Outdoor,
    /// Buried at frost-free depth
    Underground,
    /// Attic space
    Attic,
    /// Basement / utility room
    Basement,
}

/// Swedish climate range for an environment (°C)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateRange {
    pub min_c: f64,
    pub max_c: f64,
    pub typical_c: f64,
}

impl Environment {
    /// All environments for UI selection
    pub const ALL: [Environment; 5] = [
        Environment::Indoor,
        Environment::Outdoor,
        Environment::Underground,
        Environment::Attic,
        Environment::Basement,
    ];

    /// Ambient temperature range for this environment, Swedish climate
    pub fn climate_range(&self) -> ClimateRange {
        match self {
            Environment::Indoor => ClimateRange {
                min_c: 15.0,
                max_c: 35.0,
                typical_c: 20.0,
            },
            Environment::Outdoor => ClimateRange {
                min_c: 10.0,
                max_c: 32.0,
                typical_c: 15.0,
            },
            Environment::Underground => ClimateRange {
                min_c: 10.0,
                max_c: 20.0,
                typical_c: 15.0,
            },
            Environment::Attic => ClimateRange {
                min_c: 15.0,
                max_c: 45.0,
                typical_c: 30.0,
            },
            Environment::Basement => ClimateRange {
                min_c: 12.0,
                max_c: 25.0,
                typical_c: 15.0,
            },
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Environment::Indoor => "Indoor (heated space)",
            Environment::Outdoor => "Outdoor (Swedish climate)",
            Environment::Underground => "Underground (frost-free depth)",
            Environment::Attic => "Attic",
            Environment::Basement => "Basement / utility room",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Recommended cable construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CableConstruction {
    /// Standard PVC installation cable for dry indoor locations
    PvcInstallation,
    /// XLPE-insulated cable, higher temperature rating
    Xlpe,
    /// Halogen-free cable for occupied or escape-route areas
    HalogenFree,
    /// Ground cable (markkabel) for direct burial
    GroundCable,
}

impl CableConstruction {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CableConstruction::PvcInstallation => "PVC installation cable",
            CableConstruction::Xlpe => "XLPE installation cable",
            CableConstruction::HalogenFree => "Halogen-free cable",
            CableConstruction::GroundCable => "Ground cable (markkabel)",
        }
    }

    /// Rated voltage marking
    pub fn rated_voltage(&self) -> &'static str {
        match self {
            CableConstruction::PvcInstallation => "450/750V",
            CableConstruction::Xlpe | CableConstruction::GroundCable => "0.6/1kV",
            CableConstruction::HalogenFree => "450/750V",
        }
    }

    /// Maximum continuous conductor temperature (°C)
    pub fn max_conductor_temp_c(&self) -> f64 {
        match self {
            CableConstruction::PvcInstallation | CableConstruction::HalogenFree => 70.0,
            CableConstruction::Xlpe | CableConstruction::GroundCable => 90.0,
        }
    }
}

impl std::fmt::Display for CableConstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pick a cable construction from installation method, environment, and
/// application.
pub fn recommended_construction(
    application: Application,
    method: InstallationMethod,
    environment: Environment,
) -> CableConstruction {
    if method.is_buried() || environment == Environment::Underground {
        return CableConstruction::GroundCable;
    }
    if environment == Environment::Outdoor {
        return CableConstruction::HalogenFree;
    }
    match application {
        // Occupied areas: halogen-free for smoke safety
        Application::Socket | Application::Bathroom => CableConstruction::HalogenFree,
        // Higher temperature rating for motor and feeder circuits
        Application::Motor | Application::Distribution => CableConstruction::Xlpe,
        _ => CableConstruction::PvcInstallation,
    }
}

/// Swedish cable designation for a size, supply class, and installation
/// method, as stocked by major suppliers (Ahlsell, Elkedjan, ...).
pub fn designation(size_mm2: f64, voltage: VoltageClass, method: InstallationMethod) -> String {
    let three_phase = voltage == VoltageClass::ThreePhase;
    let name = match method {
        InstallationMethod::A1 | InstallationMethod::A2 => {
            let (flexible, solid) = if three_phase {
                ("H07V-K 5G eller EQLQ 5x", "H07V-R 5G eller EQLE 5x")
            } else {
                ("H07V-K eller EQLQ", "H07V-R eller EQLE")
            };
            // solid conductors above 6 mm²
            if size_mm2 <= 6.0 {
                flexible
            } else {
                solid
            }
        }
        InstallationMethod::B1 | InstallationMethod::B2 => {
            if three_phase {
                "H07RN-F 5G eller EQLQ-YO 5x (fuktsäker)"
            } else {
                "H07RN-F eller EQLQ-YO (fuktsäker)"
            }
        }
        InstallationMethod::C => {
            let (small, large) = if three_phase {
                ("AXQJ 5G eller EQLQ-YO 5x", "AXKJ 5G eller EQLE-YO 5x")
            } else {
                ("AXQJ eller EQLQ-YO", "AXKJ eller EQLE-YO")
            };
            if size_mm2 <= 10.0 {
                small
            } else {
                large
            }
        }
    };
    name.to_string()
}

/// Recommended MCB breaking capacity in kA
pub fn breaking_capacity_ka(voltage: VoltageClass) -> u32 {
    match voltage {
        VoltageClass::SinglePhase => 6,
        VoltageClass::ThreePhase => 10,
    }
}

/// Run length plus 10% slack, for the shopping list
pub fn purchase_length_m(length_m: f64) -> f64 {
    length_m * PURCHASE_SLACK_FACTOR
}

/// Advisory extras attached to a sizing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Cable construction suited to the environment and application
    pub construction: CableConstruction,
    /// Swedish designation string for the shopping list
    pub designation: String,
    /// Recommended MCB breaking capacity (kA)
    pub breaking_capacity_ka: u32,
    /// Run length plus slack (m)
    pub purchase_length_m: f64,
}

impl Recommendations {
    /// Assemble the advisory extras for a selected cable.
    pub fn build(
        size_mm2: f64,
        voltage: VoltageClass,
        method: InstallationMethod,
        application: Application,
        environment: Environment,
        length_m: f64,
    ) -> Self {
        Self {
            construction: recommended_construction(application, method, environment),
            designation: designation(size_mm2, voltage, method),
            breaking_capacity_ka: breaking_capacity_ka(voltage),
            purchase_length_m: purchase_length_m(length_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buried_method_forces_ground_cable() {
        let construction = recommended_construction(
            Application::Lighting,
            InstallationMethod::C,
            Environment::Indoor,
        );
        assert_eq!(construction, CableConstruction::GroundCable);

        let construction = recommended_construction(
            Application::Lighting,
            InstallationMethod::A1,
            Environment::Underground,
        );
        assert_eq!(construction, CableConstruction::GroundCable);
    }

    #[test]
    fn test_outdoor_environment_is_halogen_free() {
        let construction = recommended_construction(
            Application::Lighting,
            InstallationMethod::B1,
            Environment::Outdoor,
        );
        assert_eq!(construction, CableConstruction::HalogenFree);
    }

    #[test]
    fn test_application_based_construction() {
        let socket = recommended_construction(
            Application::Socket,
            InstallationMethod::A1,
            Environment::Indoor,
        );
        assert_eq!(socket, CableConstruction::HalogenFree);

        let motor = recommended_construction(
            Application::Motor,
            InstallationMethod::B1,
            Environment::Indoor,
        );
        assert_eq!(motor, CableConstruction::Xlpe);

        let lighting = recommended_construction(
            Application::Lighting,
            InstallationMethod::A2,
            Environment::Indoor,
        );
        assert_eq!(lighting, CableConstruction::PvcInstallation);
    }

    #[test]
    fn test_designation_thresholds() {
        // A-methods switch from flexible to solid conductors above 6 mm²
        assert!(designation(2.5, VoltageClass::SinglePhase, InstallationMethod::A1)
            .starts_with("H07V-K"));
        assert!(designation(10.0, VoltageClass::SinglePhase, InstallationMethod::A1)
            .starts_with("H07V-R"));
        // buried switches at 10 mm²
        assert!(designation(10.0, VoltageClass::SinglePhase, InstallationMethod::C)
            .starts_with("AXQJ"));
        assert!(designation(16.0, VoltageClass::SinglePhase, InstallationMethod::C)
            .starts_with("AXKJ"));
        // three-phase carries the 5-core marking
        assert!(designation(2.5, VoltageClass::ThreePhase, InstallationMethod::A1).contains("5G"));
    }

    #[test]
    fn test_breaking_capacity() {
        assert_eq!(breaking_capacity_ka(VoltageClass::SinglePhase), 6);
        assert_eq!(breaking_capacity_ka(VoltageClass::ThreePhase), 10);
    }

    #[test]
    fn test_purchase_length_slack() {
        assert!((purchase_length_m(20.0) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_climate_ranges() {
        let attic = Environment::Attic.climate_range();
        assert_eq!(attic.typical_c, 30.0);
        assert_eq!(attic.max_c, 45.0);

        let underground = Environment::Underground.climate_range();
        assert_eq!(underground.typical_c, 15.0);
    }
}
