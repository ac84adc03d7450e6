//! A Mamdani fuzzy logic controller for a kettle heating element: given
//! the current and the desired water temperature, it infers a crisp
//! heating power percentage.
//!
//! The pipeline is the classic one. Triangular membership functions
//! fuzzify the two crisp inputs into Low/Medium/High degrees, a fixed
//! eight-rule bank fires with min/max semantics, and the aggregated
//! output curve collapses to a single value by the centroid method.
//! Inputs that activate no rule at all surface as [`NoRuleFired`] rather
//! than a NaN.
//!
//! ```
//! use fuzzy_kettle::KettleController;
//!
//! let kettle = KettleController::new();
//! let power = kettle.control(50., 20.)?;
//!
//! assert!(power > 15. && power < 20.);
//! # Ok::<(), fuzzy_kettle::NoRuleFired>(())
//! ```
//!
//! The raw aggregated curve and the per-term membership curves are plain
//! (sample, degree) data, so an external layer can plot them without the
//! engine knowing anything about presentation:
//!
//! ```
//! use fuzzy_kettle::{KettleController, Level};
//!
//! let kettle = KettleController::new();
//! let aggregated = kettle.aggregate(50., 20.);
//! let low_power = kettle.power().term_curve(Level::Low);
//!
//! assert_eq!(aggregated.len(), low_power.len());
//! ```

mod controller;
mod curve;
mod defuzz;
mod error;
mod inference;
mod membership;
mod rules;
mod terms;
mod universe;

pub use controller::KettleController;
pub use curve::FuzzyCurve;
pub use defuzz::{centroid, defuzzify};
pub use error::{ConfigError, NoRuleFired};
pub use inference::{evaluate, fuzzify};
pub use membership::{LinguisticVariable, Triangle};
pub use rules::{Rule, RULES};
pub use terms::{Key, Level};
pub use universe::Universe;
