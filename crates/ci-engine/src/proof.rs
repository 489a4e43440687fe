//! Hash-chained proof records.
//!
//! A proof is `sha256:` followed by the first 32 hex digits of the SHA-256
//! of the record rendered as sorted, spaced, ASCII-only JSON:
//!
//! ```text
//! {"credence": 0.05, "partial": 2, "prev": "GENESIS", "satisfied": 3, "system": "x", "theories": {...}}
//! ```

use ci_core::errors::{CiError, ErrorInfo};
use ci_core::hash::sha256_hex;
use ci_core::serde::to_spaced_canonical_json;
use ci_core::TheoryScores;
use serde::{Deserialize, Serialize};

use crate::result::AssessmentResult;

/// Predecessor marker of the first record in a chain.
pub const GENESIS: &str = "GENESIS";

/// Subject recorded when the profile carries no name.
pub const UNKNOWN_SUBJECT: &str = "unknown";

const PROOF_PREFIX: &str = "sha256:";
const PROOF_HEX_LEN: usize = 32;

/// Exact content hashed into a proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofRecord {
    /// Metadata name of the assessed system, or `unknown`.
    pub system: String,
    /// Aggregated credence.
    pub credence: f64,
    /// Number of satisfied indicators.
    pub satisfied: usize,
    /// Number of partial but unsatisfied indicators.
    pub partial: usize,
    /// Mean score per theory.
    pub theories: TheoryScores,
    /// Proof of the preceding record, or [`GENESIS`].
    pub prev: String,
}

impl ProofRecord {
    /// Bytes fed to the digest.
    pub fn canonical_text(&self) -> Result<String, CiError> {
        to_spaced_canonical_json(self)
    }

    /// Truncated, prefixed SHA-256 of [`Self::canonical_text`].
    pub fn digest(&self) -> Result<String, CiError> {
        let text = self.canonical_text()?;
        let hex = sha256_hex(text.as_bytes());
        Ok(format!("{PROOF_PREFIX}{}", &hex[..PROOF_HEX_LEN]))
    }
}

fn broken(index: usize, reason: &str, expected: &str, found: &str) -> CiError {
    CiError::Chain(
        ErrorInfo::new("chain_broken", format!("entry {index}: {reason}"))
            .with_context("index", index.to_string())
            .with_context("expected", expected)
            .with_context("found", found),
    )
}

/// Verifies a chain that starts at [`GENESIS`].
pub fn verify_chain(results: &[AssessmentResult]) -> Result<(), CiError> {
    verify_chain_from(GENESIS, results)
}

/// Verifies a chain segment whose first record links to `prev`.
///
/// Every record must link to its predecessor, agree with the result it is
/// attached to, and hash to the stored proof. The first broken position is
/// reported.
pub fn verify_chain_from(prev: &str, results: &[AssessmentResult]) -> Result<(), CiError> {
    let mut expected_prev = prev.to_string();
    for (index, result) in results.iter().enumerate() {
        let record = &result.proof_record;
        if record.prev != expected_prev {
            return Err(broken(index, "predecessor mismatch", &expected_prev, &record.prev));
        }
        if record.credence.to_bits() != result.credence.to_bits() {
            return Err(broken(
                index,
                "credence mismatch",
                &result.credence.to_string(),
                &record.credence.to_string(),
            ));
        }
        if record.satisfied != result.satisfied_count || record.partial != result.partial_count {
            return Err(broken(
                index,
                "count mismatch",
                &format!("{}/{}", result.satisfied_count, result.partial_count),
                &format!("{}/{}", record.satisfied, record.partial),
            ));
        }
        if record.theories != result.theory_scores {
            return Err(broken(index, "theory score mismatch", "stored scores", "record scores"));
        }
        let digest = record.digest()?;
        if digest != result.proof_hash {
            return Err(broken(index, "digest mismatch", &digest, &result.proof_hash));
        }
        expected_prev = digest;
    }
    Ok(())
}
