#![deny(missing_docs)]
#![doc = "Assessment orchestration: runs the indicator battery, aggregates credence and chains every result into a tamper-evident history."]

pub mod engine;
pub mod proof;
/// Assessment results, summaries and text reports.
pub mod result;

pub use engine::IndicatorEngine;
pub use proof::{verify_chain, verify_chain_from, ProofRecord, GENESIS};
pub use result::{AssessmentResult, AssessmentSummary, IndicatorSummary};
