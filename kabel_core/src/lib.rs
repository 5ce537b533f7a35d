//! # kabel_core - Cable Sizing & Protection Engine
//!
//! `kabel_core` selects a minimum-compliant conductor cross-section, a
//! coordinated circuit breaker, and the required residual-current
//! protection for Swedish low-voltage installations per SS 424 14 26 and
//! SS 436 40 00 (SEK Handbok 444).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Table-Driven**: Reference data is validated once at load time and
//!   never mutated
//!
//! Results are advisory only; the crate is not a substitute for design by
//! a qualified electrician.
//!
//! ## Quick Start
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
//! println!("{} mm², {} A MCB", result.cable.size_mm2, result.breaker_rating_a);
//!
//! // Serialize for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`tables`] - Static reference tables (ampacity, derating, breakers)
//! - [`load`] - Design-current resolution from power or current input
//! - [`calculations`] - Cable selection, breaker coordination, RCD policy
//! - [`recommendations`] - Cable construction and designation advice
//! - [`search`] - Ordered search with fallback, shared by the selectors
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod load;
pub mod recommendations;
pub mod search;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use calculations::{select_protection, SizingInput, SizingResult, ADVISORY_NOTE};
pub use errors::{CalcError, CalcResult};
pub use load::{LoadInput, VoltageClass};
