use std::error::Error;
use std::path::PathBuf;

use ci_runner::AssessmentRunner;
use clap::Args;

use super::{load_catalog, load_engine};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Optional catalog file replacing the embedded reference systems.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Optional YAML credence model.
    #[arg(long)]
    pub model: Option<PathBuf>,
}

pub fn run(args: &CompareArgs) -> Result<(), Box<dyn Error>> {
    let runner = AssessmentRunner::with_catalog(load_catalog(args.catalog.as_ref())?)
        .with_engine(load_engine(args.model.as_ref())?);
    println!("{}", runner.comparative_report()?);
    Ok(())
}
