pub mod assess;
pub mod catalog;
pub mod compare;
pub mod demo;
pub mod reference;
pub mod sensitivity;
pub mod verify;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use ci_core::Profile;
use ci_credence::CredenceModel;
use ci_engine::{AssessmentResult, IndicatorEngine};
use ci_runner::Catalog;
use log::debug;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Reads a profile, choosing the parser from the file extension.
pub fn load_profile(path: &Path) -> Result<Profile, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    let profile = if is_yaml(path) {
        Profile::from_yaml_slice(&bytes)?
    } else {
        Profile::from_json_slice(&bytes)?
    };
    debug!("loaded profile from {}", path.display());
    Ok(profile)
}

/// Engine with the reference model, or the model stored at `path`.
pub fn load_engine(path: Option<&PathBuf>) -> Result<IndicatorEngine, Box<dyn Error>> {
    let engine = IndicatorEngine::new();
    match path {
        Some(path) => {
            let model = CredenceModel::from_yaml_slice(&fs::read(path)?)?;
            debug!("loaded credence model from {}", path.display());
            Ok(engine.with_model(model)?)
        }
        None => Ok(engine),
    }
}

/// Embedded reference catalog, or the catalog stored at `path`.
pub fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(Catalog::reference()?);
    };
    let bytes = fs::read(path)?;
    let catalog = if is_yaml(path) {
        Catalog::from_yaml_slice(&bytes)?
    } else {
        Catalog::from_json_slice(&bytes)?
    };
    Ok(catalog)
}

/// Prints either the text report or the pretty summary JSON.
pub fn print_result(result: &AssessmentResult, report: bool) -> Result<(), Box<dyn Error>> {
    if report {
        println!("{}", result.render_report());
    } else {
        println!("{}", serde_json::to_string_pretty(&result.summary())?);
    }
    Ok(())
}
