//! The per-collector configuration aggregate.

use serde::{Deserialize, Serialize};

use super::{Input, Output, Snippet};

/// The full configuration of one collector: its inputs, outputs, and raw
/// snippets, in server order.
///
/// The remote agent is the sole source of truth; this aggregate is only ever
/// replaced wholesale after a fresh fetch, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Configuration {
    #[serde(default)]
    pub collector_id: String,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub outputs: Vec<Output>,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}
