//! Collector list and configuration fetch methods for [`CollectorClient`].

use crate::client::CollectorClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CollectorSummary, Configuration};

impl CollectorClient {
    /// List all collectors registered with the server.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the response cannot
    /// be parsed.
    pub async fn list_collectors(&self) -> Result<Vec<CollectorSummary>> {
        endpoints::list_collectors(&self.http, &self.namespace_url, &self.auth).await
    }

    /// Fetch the full configuration of a single collector.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` for an unknown collector id, or
    /// another `ClientError` on transport or parse failure.
    pub async fn configuration(&self, collector_id: &str) -> Result<Configuration> {
        endpoints::get_configuration(&self.http, &self.namespace_url, &self.auth, collector_id)
            .await
    }
}
