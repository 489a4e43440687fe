use ci_core::{IndicatorResult, IndicatorSpec, Profile, Theory};
use serde::{Deserialize, Serialize};

use crate::{ast, gwt, hot, pp, rpt};

/// One evaluator family, dispatched by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Family {
    /// RPT-1, RPT-2.
    Rpt,
    /// GWT-1 to GWT-3.
    Gwt,
    /// HOT-1 to HOT-4.
    Hot,
    /// PP-1, PP-2.
    Pp,
    /// AST-1, AST-2.
    Ast,
}

impl Family {
    /// Families in canonical theory order.
    pub const STANDARD: [Family; 5] = [
        Family::Rpt,
        Family::Gwt,
        Family::Hot,
        Family::Pp,
        Family::Ast,
    ];

    /// Theory scored by this family.
    pub fn theory(self) -> Theory {
        match self {
            Family::Rpt => Theory::Rpt,
            Family::Gwt => Theory::Gwt,
            Family::Hot => Theory::Hot,
            Family::Pp => Theory::Pp,
            Family::Ast => Theory::Ast,
        }
    }

    /// Indicators produced by this family, in evaluation order.
    pub fn specs(self) -> &'static [IndicatorSpec] {
        match self {
            Family::Rpt => &[rpt::RPT_1, rpt::RPT_2],
            Family::Gwt => &[gwt::GWT_1, gwt::GWT_2, gwt::GWT_3],
            Family::Hot => &[hot::HOT_1, hot::HOT_2, hot::HOT_3, hot::HOT_4],
            Family::Pp => &[pp::PP_1, pp::PP_2],
            Family::Ast => &[ast::AST_1, ast::AST_2],
        }
    }

    /// Scores every indicator of the family against `profile`.
    pub fn evaluate(self, profile: &Profile) -> Vec<IndicatorResult> {
        match self {
            Family::Rpt => rpt::evaluate(profile),
            Family::Gwt => gwt::evaluate(profile),
            Family::Hot => hot::evaluate(profile),
            Family::Pp => pp::evaluate(profile),
            Family::Ast => ast::evaluate(profile),
        }
    }
}

/// Ordered list of families an engine runs for every assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Battery {
    families: Vec<Family>,
}

impl Battery {
    /// The five families in canonical theory order.
    pub fn standard() -> Self {
        Self {
            families: Family::STANDARD.to_vec(),
        }
    }

    /// Custom battery running `families` in the given order.
    pub fn new(families: Vec<Family>) -> Self {
        Self { families }
    }

    /// Families in evaluation order.
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Number of indicators one evaluation produces.
    pub fn indicator_count(&self) -> usize {
        self.families
            .iter()
            .map(|family| family.specs().len())
            .sum()
    }

    /// Runs every family in order and concatenates the results.
    pub fn evaluate(&self, profile: &Profile) -> Vec<IndicatorResult> {
        let mut indicators = Vec::with_capacity(self.indicator_count());
        for family in &self.families {
            indicators.extend(family.evaluate(profile));
        }
        indicators
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::standard()
    }
}
