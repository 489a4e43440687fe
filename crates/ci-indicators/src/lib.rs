#![deny(missing_docs)]
#![doc = "Deterministic indicator evaluators. Each family reads only the profile sections relevant to its theory and is free of side effects."]

use std::collections::BTreeMap;

use ci_core::Observed;

pub mod ast;
/// Family dispatch table and batteries.
pub mod family;
pub mod gwt;
pub mod hot;
pub mod pp;
pub mod rpt;

pub use family::{Battery, Family};

/// Builds a details map, dropping numbers that cannot be represented in JSON.
pub(crate) fn details<const N: usize>(
    entries: [(&str, Observed); N],
) -> BTreeMap<String, Observed> {
    entries
        .into_iter()
        .filter(|(_, value)| match value {
            Observed::Number(number) => number.is_finite(),
            Observed::Flag(_) => true,
        })
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
