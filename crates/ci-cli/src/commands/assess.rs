use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use super::{load_engine, load_profile, print_result};

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Profile file (`.json`, `.yaml` or `.yml`).
    #[arg(long)]
    pub profile: PathBuf,
    /// Optional YAML credence model overriding the reference constants.
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Print the text report instead of the summary JSON.
    #[arg(long)]
    pub report: bool,
}

pub fn run(args: &AssessArgs) -> Result<(), Box<dyn Error>> {
    let profile = load_profile(&args.profile)?;
    let engine = load_engine(args.model.as_ref())?;
    let result = engine.assess(&profile)?;
    print_result(&result, args.report)
}
