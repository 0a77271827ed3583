//! Reload-after-write configuration store.
//!
//! [`ConfigurationStore`] owns a [`CollectorClient`] and the id of one
//! collector, and keeps the last configuration fetched from the server.
//! Every successful mutation is followed by an unconditional full reload;
//! the snapshot is always overwritten wholesale, never merged, so the remote
//! agent stays the sole source of truth. A failed mutation leaves the
//! snapshot untouched.
//!
//! No retry and no partial update path exist on purpose: a stale read is
//! resolved by the next reload rather than by locking or diffing.

use tracing::debug;

use crate::client::CollectorClient;
use crate::error::Result;
use crate::models::{Configuration, Input, Output, Snippet};

/// Write-through view of one collector's configuration.
#[derive(Debug)]
pub struct ConfigurationStore {
    client: CollectorClient,
    collector_id: String,
    current: Option<Configuration>,
}

impl ConfigurationStore {
    /// Create a store for one collector. No fetch happens until
    /// [`refresh`](Self::refresh) is called.
    pub fn new(client: CollectorClient, collector_id: impl Into<String>) -> Self {
        Self {
            client,
            collector_id: collector_id.into(),
            current: None,
        }
    }

    /// The collector id this store is scoped to.
    pub fn collector_id(&self) -> &str {
        &self.collector_id
    }

    /// The last fetched configuration, if any fetch has succeeded yet.
    pub fn current(&self) -> Option<&Configuration> {
        self.current.as_ref()
    }

    /// Fetch the configuration from the server and replace the snapshot.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` on transport or parse failure; the previous
    /// snapshot is kept in that case.
    pub async fn refresh(&mut self) -> Result<&Configuration> {
        let configuration = self.client.configuration(&self.collector_id).await?;
        debug!(
            collector_id = %self.collector_id,
            inputs = configuration.inputs.len(),
            outputs = configuration.outputs.len(),
            snippets = configuration.snippets.len(),
            "refreshed collector configuration"
        );
        Ok(self.current.insert(configuration))
    }

    /// Create or update an input, then reload the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the save or the subsequent reload fails.
    pub async fn save_input(&mut self, input: &Input) -> Result<()> {
        self.client.save_input(&self.collector_id, input).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Delete an input by id, then reload the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the delete or the subsequent reload fails.
    pub async fn delete_input(&mut self, input_id: &str) -> Result<()> {
        self.client.delete_input(&self.collector_id, input_id).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Create or update an output, then reload the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the save or the subsequent reload fails.
    pub async fn save_output(&mut self, output: &Output) -> Result<()> {
        self.client.save_output(&self.collector_id, output).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Delete an output by id, then reload the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the delete or the subsequent reload fails.
    pub async fn delete_output(&mut self, output_id: &str) -> Result<()> {
        self.client
            .delete_output(&self.collector_id, output_id)
            .await?;
        self.refresh().await?;
        Ok(())
    }

    /// Create or update a snippet, then reload the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the save or the subsequent reload fails.
    pub async fn save_snippet(&mut self, snippet: &Snippet) -> Result<()> {
        self.client.save_snippet(&self.collector_id, snippet).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Delete a snippet by id, then reload the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the delete or the subsequent reload fails.
    pub async fn delete_snippet(&mut self, snippet_id: &str) -> Result<()> {
        self.client
            .delete_snippet(&self.collector_id, snippet_id)
            .await?;
        self.refresh().await?;
        Ok(())
    }
}
