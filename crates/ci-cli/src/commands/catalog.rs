use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use super::load_catalog;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Optional catalog file replacing the embedded reference systems.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: &CatalogArgs) -> Result<(), Box<dyn Error>> {
    let catalog = load_catalog(args.catalog.as_ref())?;
    for (name, profile) in catalog.iter() {
        match (profile.name(), profile.kind()) {
            (Some(system), Some(kind)) => println!("{name}\t{system}\t{kind}"),
            (Some(system), None) => println!("{name}\t{system}"),
            _ => println!("{name}"),
        }
    }
    Ok(())
}
