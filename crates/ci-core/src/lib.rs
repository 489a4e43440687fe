#![deny(missing_docs)]
#![doc = "Core types, profile schema, error surface and canonical serialisation shared by the indicator crates."]

pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
/// Indicator results, statuses and scoring thresholds.
pub mod indicator;
pub mod profile;
/// Canonical JSON serde helpers.
pub mod serde;
/// Theory families and per-theory score maps.
pub mod theory;

pub use errors::{CiError, ErrorInfo};
pub use indicator::{
    clamp_unit, IndicatorResult, IndicatorSpec, IndicatorStatus, Observed, PARTIAL_THRESHOLD,
    SATISFIED_THRESHOLD,
};
pub use profile::{Architecture, Behaviors, InternalStates, Metadata, Profile, Reading};
pub use theory::{Theory, TheoryScores};
