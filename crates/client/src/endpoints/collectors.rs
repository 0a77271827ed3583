//! Collector list and configuration fetch endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::{parse_json, send_request};
use crate::error::Result;
use crate::models::{CollectorListResponse, CollectorSummary, Configuration};

/// List all collectors registered with the server.
///
/// # Errors
///
/// Returns a `ClientError` if the request fails or the response cannot be
/// parsed.
pub async fn list_collectors(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
) -> Result<Vec<CollectorSummary>> {
    let builder = auth.apply(client.get(namespace_url));
    let response = send_request(builder, "/", "GET").await?;

    let parsed: CollectorListResponse = parse_json(response).await?;
    Ok(parsed.collectors)
}

/// Fetch the full configuration of a single collector.
///
/// # Errors
///
/// Returns `ClientError::NotFound` for an unknown collector id, or another
/// `ClientError` if the request fails or the response cannot be parsed.
pub async fn get_configuration(
    client: &Client,
    namespace_url: &str,
    auth: &AuthStrategy,
    collector_id: &str,
) -> Result<Configuration> {
    let url = format!("{namespace_url}/{collector_id}");
    let builder = auth.apply(client.get(&url));
    let response = send_request(builder, "/{collectorId}", "GET").await?;

    parse_json(response).await
}
