//! # Breaker Rating Ladders
//!
//! Miniature circuit breaker (MCB) ratings commonly paired with each
//! standard cable size in Swedish practice. The coordinator scans a
//! ladder ascending for the first rating satisfying Ib ≤ In ≤ Iz
//! (SS 436 40 00 section 433.1).
//!
//! Each size carries separate single-phase and three-phase sub-ladders.
//! The sub-ladders coincide for the tabulated sizes, but are kept apart
//! so the data can diverge without touching the coordination logic.

use crate::load::VoltageClass;

/// (size mm², single-phase ratings, three-phase ratings), ascending by size.
/// Ratings within a ladder are ascending.
const BREAKER_LADDERS: &[(f64, &[u32], &[u32])] = &[
    (1.5, &[6, 10, 13, 16], &[6, 10, 13, 16]),
    (2.5, &[10, 13, 16, 20], &[10, 13, 16, 20]),
    (4.0, &[16, 20, 25, 32], &[16, 20, 25, 32]),
    (6.0, &[20, 25, 32, 40], &[20, 25, 32, 40]),
    (10.0, &[32, 40, 50], &[32, 40, 50]),
    (16.0, &[40, 50, 63], &[40, 50, 63]),
    (25.0, &[63, 80], &[63, 80]),
    (35.0, &[80, 100], &[80, 100]),
    (50.0, &[100, 125], &[100, 125]),
    (70.0, &[125, 160], &[125, 160]),
    (95.0, &[160, 200], &[160, 200]),
    (120.0, &[200, 250], &[200, 250]),
    (150.0, &[200, 250], &[200, 250]),
    (185.0, &[250, 315], &[250, 315]),
    (240.0, &[315, 400], &[315, 400]),
    (300.0, &[320, 400], &[320, 400]),
];

/// Breaker ratings available for a cable size and supply class.
///
/// Returns an empty slice for non-standard sizes; the coordinator treats
/// an empty ladder like one with no satisfying rating.
pub fn breaker_ladder(size_mm2: f64, voltage: VoltageClass) -> &'static [u32] {
    BREAKER_LADDERS
        .iter()
        .find(|(size, _, _)| (size - size_mm2).abs() < 1e-9)
        .map(|(_, single, three)| match voltage {
            VoltageClass::SinglePhase => *single,
            VoltageClass::ThreePhase => *three,
        })
        .unwrap_or(&[])
}
