use std::error::Error;
use std::fs;
use std::path::PathBuf;

use ci_engine::{verify_chain, AssessmentResult};
use clap::Args;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// JSON array of assessment results, oldest first.
    #[arg(long)]
    pub history: PathBuf,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(&args.history)?;
    let history: Vec<AssessmentResult> = serde_json::from_slice(&bytes)?;
    verify_chain(&history)?;
    match history.last() {
        Some(last) => println!("chain ok: {} entries, head {}", history.len(), last.proof_hash),
        None => println!("chain ok: empty history"),
    }
    Ok(())
}
