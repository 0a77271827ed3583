//! Input sub-resource endpoints.
//!
//! Save requests are dispatched by id: an input with an empty `id` is
//! created with POST (the server assigns the identity), one with a non-empty
//! `id` is updated with PUT addressed to that id, repeating the id in the
//! body. Properties are always transmitted as a structured string/string
//! mapping.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::Serialize;

use crate::auth::AuthStrategy;
use crate::endpoints::{parse_json, send_request};
use crate::error::Result;
use crate::models::{Input, InputListResponse};

#[derive(Serialize)]
struct InputSaveRequest<'a> {
    #[serde(rename = "input_id", skip_serializing_if = "Option::is_none")]
    input_id: Option<&'a str>,
    #[serde(rename = "type")]
    input_type: &'a str,
    name: &'a str,
    forward_to: &'a str,
    properties: &'a BTreeMap<String, String>,
}

/// List the inputs of a collector.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails or the response cannot be
/// parsed.
pub async fn list_inputs(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
) -> Result<Vec<Input>> {
    let url = format!("{namespace_url}/{collector_id}/inputs");
    let builder = auth.apply(client.get(&url));
    let response = send_request(builder, "/{collectorId}/inputs", "GET").await?;

    let parsed: InputListResponse = parse_json(response).await?;
    Ok(parsed.inputs)
}

/// Create or update an input, keyed by empty-vs-present id.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails.
pub async fn save_input(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
    input: &Input,
) -> Result<()> {
    let mut body = InputSaveRequest {
        input_id: None,
        input_type: &input.input_type,
        name: &input.name,
        forward_to: &input.forward_to,
        properties: &input.properties,
    };

    let (builder, route) = if input.id.is_empty() {
        let url = format!("{namespace_url}/{collector_id}/inputs");
        (client.post(&url), "/{collectorId}/inputs")
    } else {
        body.input_id = Some(&input.id);
        let url = format!("{namespace_url}/{collector_id}/inputs/{}", input.id);
        (client.put(&url), "/{collectorId}/inputs/{inputId}")
    };

    let method = if input.id.is_empty() { "POST" } else { "PUT" };
    let builder = auth.apply(builder).json(&body);
    let _response = send_request(builder, route, method).await?;

    Ok(())
}

/// Delete an input by id.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails.
pub async fn delete_input(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
    input_id: &str,
) -> Result<()> {
    let url = format!("{namespace_url}/{collector_id}/inputs/{input_id}");
    let builder = auth.apply(client.delete(&url));
    let _response = send_request(builder, "/{collectorId}/inputs/{inputId}", "DELETE").await?;

    Ok(())
}
