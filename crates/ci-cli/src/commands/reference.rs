use std::error::Error;
use std::path::PathBuf;

use ci_runner::AssessmentRunner;
use clap::Args;

use super::{load_catalog, load_engine, print_result};

#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Catalog entry name, e.g. `Thermostat`.
    #[arg(long)]
    pub name: String,
    /// Optional catalog file replacing the embedded reference systems.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Optional YAML credence model.
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Print the text report instead of the summary JSON.
    #[arg(long)]
    pub report: bool,
}

pub fn run(args: &ReferenceArgs) -> Result<(), Box<dyn Error>> {
    let runner = AssessmentRunner::with_catalog(load_catalog(args.catalog.as_ref())?)
        .with_engine(load_engine(args.model.as_ref())?);
    let result = runner.run_reference(&args.name)?;
    print_result(&result, args.report)
}
