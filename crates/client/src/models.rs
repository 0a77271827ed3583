//! Data model for the collector configuration API.

mod collectors;
mod configuration;
mod inputs;
mod outputs;
mod snippets;

pub use collectors::{CollectorListResponse, CollectorSummary};
pub use configuration::Configuration;
pub use inputs::{Input, InputListResponse};
pub use outputs::{Output, OutputListResponse};
pub use snippets::{Snippet, SnippetListResponse};

/// Default backend type for structured inputs and outputs.
pub(crate) fn default_entity_type() -> String {
    "nxlog".to_string()
}
