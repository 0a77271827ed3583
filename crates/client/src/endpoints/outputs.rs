//! Output sub-resource endpoints.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::Serialize;

use crate::auth::AuthStrategy;
use crate::endpoints::{parse_json, send_request};
use crate::error::Result;
use crate::models::{Output, OutputListResponse};

#[derive(Serialize)]
struct OutputSaveRequest<'a> {
    #[serde(rename = "output_id", skip_serializing_if = "Option::is_none")]
    output_id: Option<&'a str>,
    #[serde(rename = "type")]
    output_type: &'a str,
    name: &'a str,
    properties: &'a BTreeMap<String, String>,
}

/// List the outputs of a collector.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails or the response cannot be
/// parsed.
pub async fn list_outputs(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
) -> Result<Vec<Output>> {
    let url = format!("{namespace_url}/{collector_id}/outputs");
    let builder = auth.apply(client.get(&url));
    let response = send_request(builder, "/{collectorId}/outputs", "GET").await?;

    let parsed: OutputListResponse = parse_json(response).await?;
    Ok(parsed.outputs)
}

/// Create or update an output, keyed by empty-vs-present id.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails.
pub async fn save_output(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
    output: &Output,
) -> Result<()> {
    let mut body = OutputSaveRequest {
        output_id: None,
        output_type: &output.output_type,
        name: &output.name,
        properties: &output.properties,
    };

    let (builder, route) = if output.id.is_empty() {
        let url = format!("{namespace_url}/{collector_id}/outputs");
        (client.post(&url), "/{collectorId}/outputs")
    } else {
        body.output_id = Some(&output.id);
        let url = format!("{namespace_url}/{collector_id}/outputs/{}", output.id);
        (client.put(&url), "/{collectorId}/outputs/{outputId}")
    };

    let method = if output.id.is_empty() { "POST" } else { "PUT" };
    let builder = auth.apply(builder).json(&body);
    let _response = send_request(builder, route, method).await?;

    Ok(())
}

/// Delete an output by id.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails.
pub async fn delete_output(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
    output_id: &str,
) -> Result<()> {
    let url = format!("{namespace_url}/{collector_id}/outputs/{output_id}");
    let builder = auth.apply(client.delete(&url));
    let _response = send_request(builder, "/{collectorId}/outputs/{outputId}", "DELETE").await?;

    Ok(())
}
