use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::dtos::AllocationEntry;

/// Default request timeout. A hung backend request would otherwise pin the
/// round-trip forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("server answered {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the allocation mutation endpoints: the delete round-trip
/// and the edit navigation target.
pub struct AllocationClient {
    http: reqwest::Client,
    base_url: String,
}

impl AllocationClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// Asks the backend to delete `address`. Any 2xx answer (after
    /// redirects) is success; anything else is an explicit error.
    pub async fn request_delete(&self, address: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .get(format!("{}/supprimer/{}", self.base_url, address))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(())
    }

    /// The full reload: re-fetches the entire allocation list. There is no
    /// partial cache to patch after a mutation.
    pub async fn fetch_allocations(&self) -> Result<Vec<AllocationEntry>, ClientError> {
        let response = self
            .http
            .get(format!("{}/allocations", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Delete round-trip: on success the list is reloaded wholesale and
    /// returned; on failure the caller's view is left untouched.
    pub async fn delete(&self, address: &str) -> Result<Vec<AllocationEntry>, ClientError> {
        self.request_delete(address).await?;
        self.fetch_allocations().await
    }

    /// Navigation target for the edit form of `address`. No validation
    /// happens here.
    pub fn edit_url(&self, address: &str) -> String {
        format!("{}/editer/{}", self.base_url, address)
    }
}
