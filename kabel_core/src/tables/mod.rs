//! # Reference Tables
//!
//! Static reference data from SS 424 14 26 / SEK Handbok 444: conductor
//! materials, installation methods, insulation classes, current-carrying
//! capacities, derating factors, and breaker-rating ladders.
//!
//! All tables are process-wide, read-only, and initialized once. Lookups
//! never mutate; selection logic lives in [`crate::calculations`].
//!
//! ## Tables
//!
//! - [`ampacity`] - Current-carrying capacity per Tabell 52B.3
//! - [`derating`] - Temperature (52B.14) and grouping (52B.17) factors
//! - [`breakers`] - MCB rating ladders per cable size
//!
//! ## Example
//!
//! ```rust
//! use kabel_core::tables::{AmpacityTable, Material, InstallationMethod};
//!
//! let table = AmpacityTable::standard();
//! let column = table
//!     .column(Material::Copper, InstallationMethod::B1)
//!     .unwrap();
//! assert_eq!(column.sizes_mm2[0], 1.5);
//! ```

pub mod ampacity;
pub mod breakers;
pub mod derating;

// Re-export table types
pub use ampacity::{AmpacityColumn, AmpacityTable};
pub use breakers::breaker_ladder;
pub use derating::{grouping_factor, temperature_factor, DeratingFactors};

use serde::{Deserialize, Serialize};

/// Conductor material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Material {
    /// Copper conductor (Cu)
    #[default]
    Copper,
    /// Aluminum conductor (Al)
    Aluminum,
}

impl Material {
    /// All materials for UI selection
    pub const ALL: [Material; 2] = [Material::Copper, Material::Aluminum];

    /// Conductor resistivity at typical operating temperature (70°C),
    /// in Ω·mm²/m. Used for voltage-drop calculation.
    pub fn resistivity_ohm_mm2_per_m(&self) -> f64 {
        match self {
            Material::Copper => 0.0225,
            Material::Aluminum => 0.036,
        }
    }

    /// Short designation used on cable markings
    pub fn symbol(&self) -> &'static str {
        match self {
            Material::Copper => "Cu",
            Material::Aluminum => "Al",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Copper => "Copper (Cu)",
            Material::Aluminum => "Aluminum (Al)",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Installation method per SS 424 14 26 Tabell 52B.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InstallationMethod {
    /// A1: Insulated conductors in conduit in a thermally insulated wall
    A1,
    /// A2: Multi-core cable in conduit in an insulated wall
    A2,
    /// B1: Insulated conductors in conduit on a wall / in air
    #[default]
    B1,
    /// B2: Multi-core cable in conduit on a wall / in air
    B2,
    /// C: Single- or multi-core cable buried directly in the ground
    C,
}

impl InstallationMethod {
    /// All installation methods for UI selection
    pub const ALL: [InstallationMethod; 5] = [
        InstallationMethod::A1,
        InstallationMethod::A2,
        InstallationMethod::B1,
        InstallationMethod::B2,
        InstallationMethod::C,
    ];

    /// Whether the cable runs underground
    pub fn is_buried(&self) -> bool {
        matches!(self, InstallationMethod::C)
    }

    /// Short code as used in the standard (e.g., "B1")
    pub fn code(&self) -> &'static str {
        match self {
            InstallationMethod::A1 => "A1",
            InstallationMethod::A2 => "A2",
            InstallationMethod::B1 => "B1",
            InstallationMethod::B2 => "B2",
            InstallationMethod::C => "C",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            InstallationMethod::A1 => "A1 - Conduit in insulated wall",
            InstallationMethod::A2 => "A2 - Cable in conduit in insulated wall",
            InstallationMethod::B1 => "B1 - Conduit on wall / in air",
            InstallationMethod::B2 => "B2 - Cable in conduit on wall / in air",
            InstallationMethod::C => "C - Buried in ground",
        }
    }
}

impl std::fmt::Display for InstallationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Cable insulation class, selecting which temperature-factor table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Insulation {
    /// PVC insulation, 70°C conductor rating
    #[default]
    Pvc,
    /// Cross-linked polyethylene (PEX/XLPE), 90°C conductor rating
    Pex,
}

impl Insulation {
    /// All insulation classes for UI selection
    pub const ALL: [Insulation; 2] = [Insulation::Pvc, Insulation::Pex];

    /// Maximum continuous conductor temperature (°C)
    pub fn max_conductor_temp_c(&self) -> f64 {
        match self {
            Insulation::Pvc => 70.0,
            Insulation::Pex => 90.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Insulation::Pvc => "PVC (70°C)",
            Insulation::Pex => "PEX/XLPE (90°C)",
        }
    }
}

impl std::fmt::Display for Insulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
