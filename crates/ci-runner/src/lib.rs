#![deny(missing_docs)]
#![doc = include_str!("../docs/runner-api.md")]

pub mod catalog;
/// Comparative report rendering.
pub mod report;
pub mod runner;

pub use catalog::Catalog;
pub use report::render_comparative;
pub use runner::{rank, AssessmentRunner};
