//! # Ordered Search with Fallback
//!
//! Both the cable selector and the breaker coordinator walk a finite
//! ascending sequence looking for the first acceptable candidate, and fall
//! back to the least-bad one when nothing qualifies. That pattern lives
//! here once, parameterized by an acceptance predicate and a fallback
//! comparator.
//!
//! The walk is bounded by the sequence length, which is the explicit
//! termination argument for every search in this crate.

/// Outcome of an ordered search: either the first qualifying candidate or
/// the best available fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    /// First candidate satisfying the acceptance predicate
    Qualified(T),
    /// No candidate qualified; this is the best approximation
    Fallback(T),
}

impl<T> SearchOutcome<T> {
    /// Whether the search found a fully qualifying candidate
    pub fn is_qualified(&self) -> bool {
        matches!(self, SearchOutcome::Qualified(_))
    }

    /// Unwrap the carried candidate either way
    pub fn into_inner(self) -> T {
        match self {
            SearchOutcome::Qualified(value) | SearchOutcome::Fallback(value) => value,
        }
    }
}

/// Walk `candidates` in order, returning the first one `accepts` admits.
///
/// If none qualifies, returns the fallback winner under `prefer`, where
/// `prefer(a, b)` answers "is `a` a better fallback than `b`". Returns
/// `None` only for an empty sequence.
pub fn first_or_best<T, I, A, P>(candidates: I, accepts: A, prefer: P) -> Option<SearchOutcome<T>>
where
    I: IntoIterator<Item = T>,
    A: Fn(&T) -> bool,
    P: Fn(&T, &T) -> bool,
{
    let mut best: Option<T> = None;
    for candidate in candidates {
        if accepts(&candidate) {
            return Some(SearchOutcome::Qualified(candidate));
        }
        best = Some(match best {
            None => candidate,
            Some(current) => {
                if prefer(&candidate, &current) {
                    candidate
                } else {
                    current
                }
            }
        });
    }
    best.map(SearchOutcome::Fallback)
}
