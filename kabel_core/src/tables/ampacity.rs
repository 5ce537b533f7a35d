//! # Current-Carrying Capacity Tables
//!
//! Ampacity data from SS 424 14 26 Tabell 52B.3 (Bilaga 52B), referenced to
//! 30°C ambient air and 20°C ground temperature.
//!
//! Each (material, installation method) pair maps to a column of base
//! ampacities index-aligned with a parallel column of standard cross-section
//! sizes. Both sequences must have equal length and the sizes must be
//! strictly increasing; [`AmpacityColumn::new`] enforces this at load time
//! so a transcription error fails loudly instead of silently misaligning
//! indices.
//!
//! ## Example
//!
//! ```rust
//! use kabel_core::tables::{AmpacityTable, Material, InstallationMethod};
//!
//! let column = AmpacityTable::standard()
//!     .column(Material::Copper, InstallationMethod::B1)
//!     .unwrap();
//!
//! // 2.5 mm² copper in B1 carries 31 A at reference conditions
//! assert_eq!(column.sizes_mm2[1], 2.5);
//! assert_eq!(column.ampacities_a[1], 31.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tables::{InstallationMethod, Material};

/// Standard copper cross-sections (mm²), Tabell 52B.3
const COPPER_SIZES: &[f64] = &[
    1.5, 2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0,
];

/// Aluminum cross-sections for methods A1/A2/B1 (table stops at 240 mm²)
const ALUMINUM_SIZES_SHORT: &[f64] = &[
    2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0,
];

/// Aluminum cross-sections for methods B2/C (table extends to 300 mm²)
const ALUMINUM_SIZES_LONG: &[f64] = &[
    2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0, 300.0,
];

/// One (material, method) column: parallel sizes and base ampacities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmpacityColumn {
    /// Standard cross-section sizes in mm², strictly increasing
    pub sizes_mm2: Vec<f64>,
    /// Base ampacity in amperes at reference conditions, index-aligned
    /// with `sizes_mm2`
    pub ampacities_a: Vec<f64>,
}

impl AmpacityColumn {
    /// Create a validated column.
    ///
    /// Invariants checked:
    /// - both sequences have equal, non-zero length
    /// - sizes are strictly increasing
    /// - all ampacities are positive
    pub fn new(sizes_mm2: Vec<f64>, ampacities_a: Vec<f64>) -> CalcResult<Self> {
        if sizes_mm2.len() != ampacities_a.len() {
            return Err(CalcError::invalid_table(
                "ampacity",
                format!(
                    "{} sizes but {} ampacities",
                    sizes_mm2.len(),
                    ampacities_a.len()
                ),
            ));
        }
        if sizes_mm2.is_empty() {
            return Err(CalcError::invalid_table("ampacity", "column is empty"));
        }
        for pair in sizes_mm2.windows(2) {
            if pair[1] <= pair[0] {
                return Err(CalcError::invalid_table(
                    "ampacity",
                    format!("sizes not strictly increasing at {} -> {}", pair[0], pair[1]),
                ));
            }
        }
        if ampacities_a.iter().any(|a| *a <= 0.0) {
            return Err(CalcError::invalid_table(
                "ampacity",
                "ampacities must be positive",
            ));
        }
        Ok(Self {
            sizes_mm2,
            ampacities_a,
        })
    }

    /// Number of standard sizes in this column
    pub fn len(&self) -> usize {
        self.sizes_mm2.len()
    }

    /// Whether the column has no entries
    pub fn is_empty(&self) -> bool {
        self.sizes_mm2.is_empty()
    }

    /// Index of a given standard size, if present
    pub fn index_of(&self, size_mm2: f64) -> Option<usize> {
        self.sizes_mm2
            .iter()
            .position(|s| (s - size_mm2).abs() < 1e-9)
    }
}

/// Ampacity table keyed by (material, installation method).
#[derive(Debug, Clone)]
pub struct AmpacityTable {
    columns: HashMap<(Material, InstallationMethod), AmpacityColumn>,
}

impl AmpacityTable {
    /// Build a table from explicit columns, validating each.
    pub fn from_columns(
        columns: Vec<((Material, InstallationMethod), (Vec<f64>, Vec<f64>))>,
    ) -> CalcResult<Self> {
        let mut map = HashMap::new();
        for ((material, method), (sizes, ampacities)) in columns {
            map.insert((material, method), AmpacityColumn::new(sizes, ampacities)?);
        }
        Ok(Self { columns: map })
    }

    /// The built-in standard table (Tabell 52B.3), validated once at first use.
    pub fn standard() -> &'static AmpacityTable {
        &STANDARD_TABLE
    }

    /// Look up the column for a (material, method) pair
    pub fn column(
        &self,
        material: Material,
        method: InstallationMethod,
    ) -> Option<&AmpacityColumn> {
        self.columns.get(&(material, method))
    }
}

static STANDARD_TABLE: Lazy<AmpacityTable> = Lazy::new(|| {
    use InstallationMethod::*;
    use Material::*;

    let col = |sizes: &[f64], amps: &[f64]| (sizes.to_vec(), amps.to_vec());

    AmpacityTable::from_columns(vec![
        (
            (Copper, A1),
            col(
                COPPER_SIZES,
                &[
                    19.0, 26.0, 35.0, 45.0, 61.0, 81.0, 106.0, 131.0, 158.0, 200.0, 241.0, 278.0,
                    316.0, 362.0, 424.0,
                ],
            ),
        ),
        (
            (Copper, A2),
            col(
                COPPER_SIZES,
                &[
                    23.0, 31.0, 42.0, 54.0, 75.0, 100.0, 127.0, 158.0, 192.0, 246.0, 298.0, 346.0,
                    391.0, 450.0, 522.0,
                ],
            ),
        ),
        (
            (Copper, B1),
            col(
                COPPER_SIZES,
                &[
                    23.0, 31.0, 42.0, 54.0, 70.0, 94.0, 119.0, 148.0, 179.0, 229.0, 278.0, 322.0,
                    364.0, 419.0, 486.0,
                ],
            ),
        ),
        (
            (Copper, B2),
            col(
                COPPER_SIZES,
                &[
                    26.0, 35.0, 47.0, 61.0, 80.0, 107.0, 138.0, 171.0, 207.0, 268.0, 328.0, 382.0,
                    434.0, 500.0, 593.0,
                ],
            ),
        ),
        (
            (Copper, C),
            col(
                COPPER_SIZES,
                &[
                    24.0, 33.0, 45.0, 58.0, 80.0, 107.0, 138.0, 171.0, 207.0, 268.0, 328.0, 382.0,
                    434.0, 500.0, 593.0,
                ],
            ),
        ),
        (
            (Aluminum, A1),
            col(
                ALUMINUM_SIZES_SHORT,
                &[
                    20.0, 27.0, 35.0, 48.0, 64.0, 84.0, 103.0, 125.0, 191.0, 220.0, 253.0, 288.0,
                    337.0, 387.0,
                ],
            ),
        ),
        (
            (Aluminum, A2),
            col(
                ALUMINUM_SIZES_SHORT,
                &[
                    25.0, 33.0, 43.0, 57.0, 78.0, 105.0, 130.0, 157.0, 200.0, 242.0, 280.0, 319.0,
                    371.0, 427.0,
                ],
            ),
        ),
        (
            (Aluminum, B1),
            col(
                ALUMINUM_SIZES_SHORT,
                &[
                    25.0, 33.0, 43.0, 57.0, 73.0, 98.0, 130.0, 157.0, 191.0, 242.0, 280.0, 319.0,
                    371.0, 427.0,
                ],
            ),
        ),
        (
            (Aluminum, B2),
            col(
                ALUMINUM_SIZES_LONG,
                &[
                    26.0, 35.0, 45.0, 59.0, 84.0, 90.0, 115.0, 142.0, 172.0, 219.0, 265.0, 307.0,
                    348.0, 400.0, 464.0,
                ],
            ),
        ),
        (
            (Aluminum, C),
            col(
                ALUMINUM_SIZES_LONG,
                &[
                    26.0, 35.0, 45.0, 59.0, 84.0, 90.0, 115.0, 142.0, 172.0, 219.0, 265.0, 307.0,
                    348.0, 400.0, 464.0,
                ],
            ),
        ),
    ])
    .expect("built-in ampacity table data is internally consistent")
});
