//! Collector registration models.

use serde::{Deserialize, Serialize};

/// Summary of a collector agent registered with the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorSummary {
    /// The collector id the configuration is scoped to.
    #[serde(default)]
    pub id: String,
    /// Node id the collector reports from.
    #[serde(default)]
    pub node_id: String,
    /// Version string reported by the collector, if any.
    pub collector_version: Option<String>,
    /// Last check-in timestamp as reported by the server.
    pub last_seen: Option<String>,
    /// Whether the collector checked in recently enough to count as active.
    #[serde(default)]
    pub active: bool,
}

/// Collector list response for the namespace root.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorListResponse {
    #[serde(default)]
    pub collectors: Vec<CollectorSummary>,
}
