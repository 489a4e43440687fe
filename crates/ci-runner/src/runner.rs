//! Batch assessment over a catalog.

use ci_core::errors::CiError;
use ci_core::Profile;
use ci_engine::{AssessmentResult, IndicatorEngine};
use log::info;

use crate::catalog::Catalog;
use crate::report::render_comparative;

/// Runs catalog entries and custom profiles through one engine.
#[derive(Debug)]
pub struct AssessmentRunner {
    catalog: Catalog,
    engine: IndicatorEngine,
}

impl AssessmentRunner {
    /// Runner over the embedded reference catalog with a default engine.
    pub fn new() -> Result<Self, CiError> {
        Ok(Self::with_catalog(Catalog::reference()?))
    }

    /// Runner over `catalog` with a default engine.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            engine: IndicatorEngine::new(),
        }
    }

    /// Replaces the engine, e.g. to use a custom credence model.
    pub fn with_engine(mut self, engine: IndicatorEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Catalog in use.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Engine holding the proof chain of every run.
    pub fn engine(&self) -> &IndicatorEngine {
        &self.engine
    }

    /// Assesses the catalog entry called `name`.
    pub fn run_reference(&self, name: &str) -> Result<AssessmentResult, CiError> {
        let profile = self.catalog.require(name)?;
        info!("assessing catalog entry {name}");
        self.engine.assess(profile)
    }

    /// Assesses a profile that is not in the catalog.
    pub fn run_custom(&self, profile: &Profile) -> Result<AssessmentResult, CiError> {
        self.engine.assess(profile)
    }

    /// Assesses every catalog entry in catalog order.
    pub fn run_all_references(&self) -> Result<Vec<AssessmentResult>, CiError> {
        self.catalog
            .iter()
            .map(|(name, profile)| {
                info!("assessing catalog entry {name}");
                self.engine.assess(profile)
            })
            .collect()
    }

    /// Runs every entry, ranks the results and renders the comparison.
    pub fn comparative_report(&self) -> Result<String, CiError> {
        let ranked = rank(self.run_all_references()?);
        Ok(render_comparative(&ranked))
    }
}

/// Orders results by descending credence. Ties keep their input order.
pub fn rank(mut results: Vec<AssessmentResult>) -> Vec<AssessmentResult> {
    results.sort_by(|a, b| b.credence.total_cmp(&a.credence));
    results
}
