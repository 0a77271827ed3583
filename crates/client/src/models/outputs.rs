//! Output models for collector log destinations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::default_entity_type;

/// A log destination/forwarder definition on a remote collector.
///
/// An empty `id` marks an output that has not been created on the server yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Server-assigned identity, empty for a not-yet-created output.
    #[serde(rename = "output_id", default)]
    pub id: String,
    /// Collector backend type.
    #[serde(rename = "type", default = "default_entity_type")]
    pub output_type: String,
    /// Display name, unique among the collector's outputs.
    #[serde(default)]
    pub name: String,
    /// Flat key/value backend properties.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            id: String::new(),
            output_type: default_entity_type(),
            name: String::new(),
            properties: BTreeMap::new(),
        }
    }
}

/// Output list response for the `outputs` sub-resource.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputListResponse {
    pub total: u64,
    #[serde(default)]
    pub outputs: Vec<Output>,
}
