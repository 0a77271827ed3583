//! Shared request dispatch and error mapping.

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Error body shape produced by the server for failed requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Send a request and map non-success responses to [`ClientError`].
///
/// Transport failures and error responses are returned to the caller
/// unchanged; there is no retry. A 404 becomes [`ClientError::NotFound`],
/// every other non-2xx status becomes [`ClientError::ApiError`] carrying the
/// server-supplied message when the body is JSON-shaped, or the raw body
/// otherwise.
pub async fn send_request(builder: RequestBuilder, route: &str, method: &str) -> Result<Response> {
    debug!(%route, %method, "sending collector API request");

    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    if status.as_u16() == 404 {
        return Err(ClientError::NotFound(url));
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Parse the body of a success response, mapping malformed JSON to
/// [`ClientError::InvalidResponse`] instead of a transport error.
pub async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
