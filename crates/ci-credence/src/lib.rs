#![deny(missing_docs)]
#![doc = "Bayesian aggregation of indicator evidence into a single credence, with leave-one-out sensitivity analysis."]

/// Posterior computation over indicator results.
pub mod aggregate;
pub mod model;

pub use aggregate::{aggregate, sensitivity_analysis, Contributions};
pub use model::CredenceModel;
