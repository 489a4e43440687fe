use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    assess::{self, AssessArgs},
    catalog::{self, CatalogArgs},
    compare::{self, CompareArgs},
    demo::{self, DemoArgs},
    reference::{self, ReferenceArgs},
    sensitivity::{self, SensitivityArgs},
    verify::{self, VerifyArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "ci", about = "Indicator assessment and credence CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess a profile read from a JSON or YAML file.
    Assess(AssessArgs),
    /// Assess one entry of the reference catalog.
    Reference(ReferenceArgs),
    /// Rank every catalog entry and print the comparative report.
    Compare(CompareArgs),
    /// List catalog entry names.
    Catalog(CatalogArgs),
    /// Print per-indicator credence contributions.
    Sensitivity(SensitivityArgs),
    /// Verify the proof chain of a saved history.
    Verify(VerifyArgs),
    /// Assess every reference system and print all reports.
    Demo(DemoArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Assess(args) => assess::run(&args),
        Command::Reference(args) => reference::run(&args),
        Command::Compare(args) => compare::run(&args),
        Command::Catalog(args) => catalog::run(&args),
        Command::Sensitivity(args) => sensitivity::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Demo(args) => demo::run(&args),
    }
}
