//! Snippet models for free-form collector configuration fragments.

use serde::{Deserialize, Serialize};

use super::default_entity_type;

/// A raw configuration fragment attached to a collector, outside the
/// structured input/output model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Server-assigned identity, empty for a not-yet-created snippet.
    #[serde(rename = "snippet_id", default)]
    pub id: String,
    /// Collector backend type the fragment applies to.
    #[serde(rename = "type", default = "default_entity_type")]
    pub snippet_type: String,
    /// Display name, unique among the collector's snippets.
    #[serde(default)]
    pub name: String,
    /// The raw configuration text.
    #[serde(default)]
    pub snippet: String,
}

impl Default for Snippet {
    fn default() -> Self {
        Self {
            id: String::new(),
            snippet_type: default_entity_type(),
            name: String::new(),
            snippet: String::new(),
        }
    }
}

/// Snippet list response for the `snippets` sub-resource.
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetListResponse {
    pub total: u64,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snippet() {
        let json = r#"{
            "snippet_id": "0a1b2c3d4e5f6a7b8c9d0e1f",
            "type": "nxlog",
            "name": "extra-routes",
            "snippet": "<Route syslog>\n  Path in => out\n</Route>"
        }"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();
        assert_eq!(snippet.name, "extra-routes");
        assert!(snippet.snippet.contains("Route syslog"));
    }

    #[test]
    fn test_deserialize_snippet_list_response() {
        let json = r#"{"total": 1, "snippets": [{"snippet_id": "s1", "name": "extra"}]}"#;
        let response: SnippetListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.snippets[0].id, "s1");
    }
}
