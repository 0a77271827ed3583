//! Snippet management methods for [`CollectorClient`].

use crate::client::CollectorClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Snippet;

impl CollectorClient {
    /// List the snippets of a collector.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the response cannot
    /// be parsed.
    pub async fn list_snippets(&self, collector_id: &str) -> Result<Vec<Snippet>> {
        endpoints::list_snippets(&self.http, &self.namespace_url, &self.auth, collector_id).await
    }

    /// Create or update a snippet, keyed by empty-vs-present id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails.
    pub async fn save_snippet(&self, collector_id: &str, snippet: &Snippet) -> Result<()> {
        endpoints::save_snippet(
            &self.http,
            &self.namespace_url,
            &self.auth,
            collector_id,
            snippet,
        )
        .await
    }

    /// Delete a snippet by id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails.
    pub async fn delete_snippet(&self, collector_id: &str, snippet_id: &str) -> Result<()> {
        endpoints::delete_snippet(
            &self.http,
            &self.namespace_url,
            &self.auth,
            collector_id,
            snippet_id,
        )
        .await
    }
}
