//! Named profile catalogs.

use ci_core::errors::{CiError, ErrorInfo};
use ci_core::Profile;
use indexmap::IndexMap;

const REFERENCE_PROFILES: &str = include_str!("../data/reference_profiles.json");

fn malformed(code: &str, err: impl ToString) -> CiError {
    CiError::MalformedInput(
        ErrorInfo::new(code, err.to_string())
            .with_hint("a catalog maps entry names to profiles"),
    )
}

/// Ordered collection of named profiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: IndexMap<String, Profile>,
}

impl Catalog {
    /// Embedded reference systems.
    pub fn reference() -> Result<Self, CiError> {
        Self::from_json_slice(REFERENCE_PROFILES.as_bytes())
    }

    /// Parses a JSON map of name to profile, preserving file order.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, CiError> {
        let entries = serde_json::from_slice(data).map_err(|err| malformed("catalog_json", err))?;
        Ok(Self { entries })
    }

    /// Parses a YAML map of name to profile, preserving file order.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, CiError> {
        let entries = serde_yaml::from_slice(data).map_err(|err| malformed("catalog_yaml", err))?;
        Ok(Self { entries })
    }

    /// Adds or replaces an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, profile: Profile) -> Option<Profile> {
        self.entries.insert(name.into(), profile)
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.entries.get(name)
    }

    /// Looks up an entry, failing with the list of valid names.
    pub fn require(&self, name: &str) -> Result<&Profile, CiError> {
        self.get(name).ok_or_else(|| {
            let available = self.names().join(", ");
            CiError::NotFound(
                ErrorInfo::new("catalog_entry", format!("unknown system: {name}"))
                    .with_context("requested", name)
                    .with_context("available", available.clone())
                    .with_hint(format!("available systems: {available}")),
            )
        })
    }

    /// Entry names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.entries
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
