//! Snippet sub-resource endpoints.

use reqwest::Client;
use serde::Serialize;

use crate::auth::AuthStrategy;
use crate::endpoints::{parse_json, send_request};
use crate::error::Result;
use crate::models::{Snippet, SnippetListResponse};

#[derive(Serialize)]
struct SnippetSaveRequest<'a> {
    #[serde(rename = "snippet_id", skip_serializing_if = "Option::is_none")]
    snippet_id: Option<&'a str>,
    #[serde(rename = "type")]
    snippet_type: &'a str,
    name: &'a str,
    snippet: &'a str,
}

/// List the snippets of a collector.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails or the response cannot be
/// parsed.
pub async fn list_snippets(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
) -> Result<Vec<Snippet>> {
    let url = format!("{namespace_url}/{collector_id}/snippets");
    let builder = auth.apply(client.get(&url));
    let response = send_request(builder, "/{collectorId}/snippets", "GET").await?;

    let parsed: SnippetListResponse = parse_json(response).await?;
    Ok(parsed.snippets)
}

/// Create or update a snippet, keyed by empty-vs-present id.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails.
pub async fn save_snippet(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
    snippet: &Snippet,
) -> Result<()> {
    let mut body = SnippetSaveRequest {
        snippet_id: None,
        snippet_type: &snippet.snippet_type,
        name: &snippet.name,
        snippet: &snippet.snippet,
    };

    let (builder, route) = if snippet.id.is_empty() {
        let url = format!("{namespace_url}/{collector_id}/snippets");
        (client.post(&url), "/{collectorId}/snippets")
    } else {
        body.snippet_id = Some(&snippet.id);
        let url = format!("{namespace_url}/{collector_id}/snippets/{}", snippet.id);
        (client.put(&url), "/{collectorId}/snippets/{snippetId}")
    };

    let method = if snippet.id.is_empty() { "POST" } else { "PUT" };
    let builder = auth.apply(builder).json(&body);
    let _response = send_request(builder, route, method).await?;

    Ok(())
}

/// Delete a snippet by id.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails.
pub async fn delete_snippet(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
    snippet_id: &str,
) -> Result<()> {
    let url = format!("{namespace_url}/{collector_id}/snippets/{snippet_id}");
    let builder = auth.apply(client.delete(&url));
    let _response = send_request(builder, "/{collectorId}/snippets/{snippetId}", "DELETE").await?;

    Ok(())
}
