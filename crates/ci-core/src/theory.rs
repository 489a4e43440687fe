use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Theory family an indicator is anchored to.
///
/// The declaration order is the canonical battery order; `Ord` follows it, so
/// a [`TheoryScores`] map iterates RPT, GWT, HOT, PP, AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Theory {
    /// Recurrent processing theory.
    Rpt,
    /// Global workspace theory.
    Gwt,
    /// Higher-order theories.
    Hot,
    /// Predictive processing.
    Pp,
    /// Attention schema theory.
    Ast,
}

impl Theory {
    /// All theories in canonical order.
    pub const ALL: [Theory; 5] = [Theory::Rpt, Theory::Gwt, Theory::Hot, Theory::Pp, Theory::Ast];

    /// Short label used in identifiers and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Theory::Rpt => "RPT",
            Theory::Gwt => "GWT",
            Theory::Hot => "HOT",
            Theory::Pp => "PP",
            Theory::Ast => "AST",
        }
    }

    /// Long descriptive name of the theory.
    pub fn full_name(self) -> &'static str {
        match self {
            Theory::Rpt => "Recurrent Processing Theory",
            Theory::Gwt => "Global Workspace Theory",
            Theory::Hot => "Higher-Order Theories",
            Theory::Pp => "Predictive Processing",
            Theory::Ast => "Attention Schema Theory",
        }
    }
}

impl fmt::Display for Theory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean indicator score per theory, iterated in canonical theory order.
pub type TheoryScores = BTreeMap<Theory, f64>;
