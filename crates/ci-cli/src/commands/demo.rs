use std::error::Error;
use std::fs;
use std::path::PathBuf;

use ci_runner::{rank, render_comparative, AssessmentRunner};
use clap::Args;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Directory receiving `history.json` with the full proof chain.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let runner = AssessmentRunner::new()?;
    let results = runner.run_all_references()?;
    for result in &results {
        println!("{}", result.render_report());
        println!();
    }
    println!("{}", render_comparative(&rank(results)));

    if let Some(out) = &args.out {
        fs::create_dir_all(out)?;
        let history = serde_json::to_string_pretty(&runner.engine().history())?;
        fs::write(out.join("history.json"), history)?;
    }
    Ok(())
}
