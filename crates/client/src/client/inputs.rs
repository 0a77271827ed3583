//! Input management methods for [`CollectorClient`].
//!
//! # What this module handles:
//! - Listing, saving, and deleting collector inputs
//!
//! # What this module does NOT handle:
//! - Name validation before a save (see [`crate::validate`])
//! - Reloading the configuration after a write (see
//!   [`crate::store::ConfigurationStore`])

use crate::client::CollectorClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Input;

impl CollectorClient {
    /// List the inputs of a collector.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the response cannot
    /// be parsed.
    pub async fn list_inputs(&self, collector_id: &str) -> Result<Vec<Input>> {
        endpoints::list_inputs(&self.http, &self.namespace_url, &self.auth, collector_id).await
    }

    /// Create or update an input.
    ///
    /// An input with an empty `id` is created (the server assigns the
    /// identity); otherwise the input with that id is updated.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails.
    pub async fn save_input(&self, collector_id: &str, input: &Input) -> Result<()> {
        endpoints::save_input(&self.http, &self.namespace_url, &self.auth, collector_id, input)
            .await
    }

    /// Delete an input by id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails.
    pub async fn delete_input(&self, collector_id: &str, input_id: &str) -> Result<()> {
        endpoints::delete_input(
            &self.http,
            &self.namespace_url,
            &self.auth,
            collector_id,
            input_id,
        )
        .await
    }
}
