//! Profile schema read by the indicator battery.
//!
//! Every section and every observation is optional. Observations are stored
//! as raw [`Reading`]s and resolved to flags or numbers once, at evaluator
//! entry, through [`flag`] and [`number`].

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{CiError, ErrorInfo};

fn malformed(code: &str, err: impl ToString) -> CiError {
    CiError::MalformedInput(
        ErrorInfo::new(code, err.to_string())
            .with_hint("profile sections must be maps of named observations"),
    )
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a metadata label, stringifying scalars and dropping anything else.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(value)) => Some(value.to_string()),
        Some(other) => {
            warn!("metadata label {other} is not a scalar, ignoring it");
            None
        }
    })
}

/// Raw observation value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    /// Boolean observation.
    Flag(bool),
    /// Numeric observation (counts, scores, latencies).
    Number(f64),
    /// Any other value; resolves to the field default.
    Other(Value),
}

impl Reading {
    /// Interprets the reading as a flag. Numbers are true when positive.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Reading::Flag(value) => Some(*value),
            Reading::Number(value) if !value.is_nan() => Some(*value > 0.0),
            _ => None,
        }
    }

    /// Interprets the reading as a number. Flags map to `1.0` and `0.0`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Reading::Flag(value) => Some(if *value { 1.0 } else { 0.0 }),
            Reading::Number(value) if !value.is_nan() => Some(*value),
            _ => None,
        }
    }
}

impl From<bool> for Reading {
    fn from(value: bool) -> Self {
        Reading::Flag(value)
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<u32> for Reading {
    fn from(value: u32) -> Self {
        Reading::Number(f64::from(value))
    }
}

/// Resolves an optional reading as a flag, defaulting to `false`.
pub fn flag(reading: &Option<Reading>, field: &str) -> bool {
    match reading {
        None => false,
        Some(value) => value.as_flag().unwrap_or_else(|| {
            warn!("observation `{field}` is not a flag, using false");
            false
        }),
    }
}

/// Resolves an optional reading as a number, falling back to `default`.
pub fn number(reading: &Option<Reading>, field: &str, default: f64) -> f64 {
    match reading {
        None => default,
        Some(value) => value.as_number().unwrap_or_else(|| {
            warn!("observation `{field}` is not numeric, using {default}");
            default
        }),
    }
}

/// Identity of the assessed system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Display name of the system.
    #[serde(
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Free-text system category.
    #[serde(
        rename = "type",
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
}

/// Structural observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Architecture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_recurrent_connections: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_depth: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_loop_count: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_connection_richness: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidirectional_connections: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_layer_feedback: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialized_module_count: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_specialization_score: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_central_workspace: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_broadcast_capability: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_latency_ms: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_flexibility: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_dynamic_routing: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_attention_mechanism: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_meta_representations: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_representation_depth: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_smoothness: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_continuous_representations: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation_quality: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchical_depth: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_top_down_predictions: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_generative_model: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_error_minimization: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_attention_schema: Option<Reading>,
}

/// Behavioural test observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Behaviors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_ignition_detected: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty_monitoring: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_calibration: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detection_rate: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_score: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systematic_preferences: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_directed_behavior: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention_guided_behavior: Option<Reading>,
}

/// Introspective observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct InternalStates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_self_model: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_report_attention_state: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention_model_accuracy: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_attention_allocation: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_based_weighting: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_prediction_error: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_error_convergence: Option<Reading>,
}

/// Complete observation bundle for one assessed system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    /// System identity.
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    /// Structural observations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub architecture: Architecture,
    /// Behavioural observations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub behaviors: Behaviors,
    /// Introspective observations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub internal_states: InternalStates,
}

impl Profile {
    /// Parses a profile from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, CiError> {
        serde_json::from_value(value).map_err(|err| malformed("profile_value", err))
    }

    /// Parses a profile from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, CiError> {
        serde_json::from_slice(data).map_err(|err| malformed("profile_json", err))
    }

    /// Parses a profile from YAML bytes.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, CiError> {
        serde_yaml::from_slice(data).map_err(|err| malformed("profile_yaml", err))
    }

    /// Metadata name, if supplied.
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Metadata type, if supplied.
    pub fn kind(&self) -> Option<&str> {
        self.metadata.kind.as_deref()
    }
}
