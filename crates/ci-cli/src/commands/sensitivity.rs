use std::error::Error;
use std::path::PathBuf;

use ci_runner::AssessmentRunner;
use clap::Args;

use super::{load_catalog, load_engine, load_profile};

#[derive(Args, Debug)]
pub struct SensitivityArgs {
    /// Profile file to analyse.
    #[arg(long, conflicts_with = "name", required_unless_present = "name")]
    pub profile: Option<PathBuf>,
    /// Catalog entry to analyse instead of a profile file.
    #[arg(long)]
    pub name: Option<String>,
    /// Optional catalog file replacing the embedded reference systems.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Optional YAML credence model.
    #[arg(long)]
    pub model: Option<PathBuf>,
}

pub fn run(args: &SensitivityArgs) -> Result<(), Box<dyn Error>> {
    let runner = AssessmentRunner::with_catalog(load_catalog(args.catalog.as_ref())?)
        .with_engine(load_engine(args.model.as_ref())?);
    let result = match (&args.profile, &args.name) {
        (Some(path), _) => runner.run_custom(&load_profile(path)?)?,
        (None, Some(name)) => runner.run_reference(name)?,
        (None, None) => return Err("either --profile or --name is required".into()),
    };
    let contributions = runner.engine().sensitivity(&result);
    println!("{}", serde_json::to_string(&contributions)?);
    Ok(())
}
