//! Person operations.

use crate::errors::ApiError;
use crate::models::{Person, PersonPayload};

use super::ApiClient;

impl ApiClient {
    /// Fetch all persons. The endpoint is unpaged and unfiltered.
    pub async fn list_persons(&self) -> Result<Vec<Person>, ApiError> {
        let resp = self.http.get(self.url("/persons")).send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, "Person list").await);
        }
        Ok(resp.json().await?)
    }

    /// Fetch a single person by id.
    pub async fn get_person(&self, id: i64) -> Result<Person, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/persons/{}", id)))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, &format!("Person {}", id)).await);
        }
        Ok(resp.json().await?)
    }

    /// Create a person. Returns the canonical record with the
    /// server-assigned id.
    pub async fn create_person(&self, payload: &PersonPayload) -> Result<Person, ApiError> {
        let resp = self
            .http
            .post(self.url("/persons"))
            .json(payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, "Person").await);
        }
        Ok(resp.json().await?)
    }

    /// Replace a person's mutable state. Returns the canonical record.
    pub async fn update_person(&self, id: i64, payload: &PersonPayload) -> Result<Person, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/persons/{}", id)))
            .json(payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, &format!("Person {}", id)).await);
        }
        Ok(resp.json().await?)
    }

    /// Delete a person by id.
    pub async fn delete_person(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/persons/{}", id)))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, &format!("Person {}", id)).await);
        }
        Ok(())
    }
}
