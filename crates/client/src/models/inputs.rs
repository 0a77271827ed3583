//! Input models for collector log sources.
//!
//! An input describes a log source configured on a remote collector, e.g. a
//! Windows event log channel or a tailed file. Its `forward_to` field names
//! the output the collected messages are shipped to; whether that output
//! exists is checked by the server, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::default_entity_type;

/// A log source definition on a remote collector.
///
/// An empty `id` marks an input that has not been created on the server yet;
/// saving it dispatches a create request and the server assigns the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// Server-assigned identity, empty for a not-yet-created input.
    #[serde(rename = "input_id", default)]
    pub id: String,
    /// Collector backend type.
    #[serde(rename = "type", default = "default_entity_type")]
    pub input_type: String,
    /// Display name, unique among the collector's inputs.
    #[serde(default)]
    pub name: String,
    /// Name of the output this input forwards to.
    #[serde(default)]
    pub forward_to: String,
    /// Flat key/value backend properties.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            id: String::new(),
            input_type: default_entity_type(),
            name: String::new(),
            forward_to: String::new(),
            properties: BTreeMap::new(),
        }
    }
}

/// Input list response for the `inputs` sub-resource.
#[derive(Debug, Clone, Deserialize)]
pub struct InputListResponse {
    pub total: u64,
    #[serde(default)]
    pub inputs: Vec<Input>,
}
