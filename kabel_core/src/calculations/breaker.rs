//! # Breaker Coordination
//!
//! Finds an MCB rating for the selected cable satisfying the coordination
//! rule Ib ≤ In ≤ Iz (SS 436 40 00 section 433.1): the rating must cover
//! the design current without exceeding the cable's derated ampacity.
//!
//! When the selected size's ladder offers no such rating, the cable is
//! escalated to the next standard size (recomputing derated ampacity and
//! voltage drop) and coordination retried. The loop is bounded: each retry
//! strictly advances the index into the finite, strictly increasing size
//! sequence. If even the largest size fails, the result falls back to the
//! smallest ladder entry covering the design current, or the largest
//! ladder entry, flagged as uncoordinated instead of erroring.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::search::{first_or_best, SearchOutcome};
use crate::tables::breakers::breaker_ladder;
use crate::tables::AmpacityColumn;

use super::cable::{CandidateCable, EvaluationContext};

/// Coordinated breaker choice, possibly after cable escalation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakerSelection {
    /// Final cable after any escalation, with recomputed figures
    pub cable: CandidateCable,
    /// Chosen breaker rating In (A)
    pub rating_a: u32,
    /// Ib ≤ In ≤ Iz holds for the final cable
    pub coordinated: bool,
    /// Cable size was raised beyond the selector's choice to satisfy
    /// coordination
    pub escalated: bool,
}

/// Coordinate a breaker for the cable at `start_index`, escalating the
/// size as needed.
pub fn coordinate_breaker(
    column: &AmpacityColumn,
    start_index: usize,
    context: &EvaluationContext,
) -> CalcResult<BreakerSelection> {
    let design_current = context.design_current_a;

    let accepts = |rating: &u32| {
        let rating = *rating as f64;
        rating >= design_current
    };

    // Bounded escalation: the index strictly advances through the finite
    // size sequence.
    let mut cable = context.evaluate(column, start_index);
    loop {
        let ladder = breaker_ladder(cable.size_mm2, context.voltage);
        let coordinated_rating = ladder
            .iter()
            .copied()
            .find(|rating| accepts(rating) && (*rating as f64) <= cable.derated_ampacity_a);

        if let Some(rating_a) = coordinated_rating {
            return Ok(BreakerSelection {
                cable,
                rating_a,
                coordinated: true,
                escalated: cable.index > start_index,
            });
        }

        let next_index = cable.index + 1;
        if next_index < column.len() {
            cable = context.evaluate(column, next_index);
            continue;
        }

        // Largest size exhausted: smallest rating covering the design
        // current, else the largest rating the ladder offers.
        let fallback = first_or_best(ladder.iter().copied(), |_| false, |a, b| {
            let a_covers = accepts(a);
            let b_covers = accepts(b);
            (a_covers && (!b_covers || a < b)) || (!a_covers && !b_covers && a > b)
        });

        let rating_a = match fallback {
            Some(SearchOutcome::Qualified(rating)) | Some(SearchOutcome::Fallback(rating)) => {
                rating
            }
            None => {
                return Err(CalcError::Internal {
                    message: format!("no breaker ladder for {} mm²", cable.size_mm2),
                })
            }
        };

        return Ok(BreakerSelection {
            cable,
            rating_a,
            coordinated: false,
            escalated: cable.index > start_index,
        });
    }
}
