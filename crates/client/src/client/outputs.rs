//! Output management methods for [`CollectorClient`].

use crate::client::CollectorClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Output;

impl CollectorClient {
    /// List the outputs of a collector.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the response cannot
    /// be parsed.
    pub async fn list_outputs(&self, collector_id: &str) -> Result<Vec<Output>> {
        endpoints::list_outputs(&self.http, &self.namespace_url, &self.auth, collector_id).await
    }

    /// Create or update an output, keyed by empty-vs-present id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails.
    pub async fn save_output(&self, collector_id: &str, output: &Output) -> Result<()> {
        endpoints::save_output(
            &self.http,
            &self.namespace_url,
            &self.auth,
            collector_id,
            output,
        )
        .await
    }

    /// Delete an output by id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails.
    pub async fn delete_output(&self, collector_id: &str, output_id: &str) -> Result<()> {
        endpoints::delete_output(
            &self.http,
            &self.namespace_url,
            &self.auth,
            collector_id,
            output_id,
        )
        .await
    }
}
