//! Movie operations.

use crate::errors::ApiError;
use crate::models::{Movie, MoviePayload};
use crate::query::MovieQuery;

use super::ApiClient;

impl ApiClient {
    /// Fetch the movie page selected by `query`.
    pub async fn list_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, ApiError> {
        let resp = self
            .http
            .get(self.url("/movies"))
            .query(&query.to_params())
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, "Movie list").await);
        }
        Ok(resp.json().await?)
    }

    /// Fetch a single movie by id.
    pub async fn get_movie(&self, id: i64) -> Result<Movie, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/movies/{}", id)))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, &format!("Movie {}", id)).await);
        }
        Ok(resp.json().await?)
    }

    /// Create a movie. Returns the canonical record with the
    /// server-assigned id and creation date.
    pub async fn create_movie(&self, payload: &MoviePayload) -> Result<Movie, ApiError> {
        let resp = self
            .http
            .post(self.url("/movies"))
            .json(payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, "Movie").await);
        }
        Ok(resp.json().await?)
    }

    /// Replace a movie's mutable state. Returns the canonical record.
    pub async fn update_movie(&self, id: i64, payload: &MoviePayload) -> Result<Movie, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/movies/{}", id)))
            .json(payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, &format!("Movie {}", id)).await);
        }
        Ok(resp.json().await?)
    }

    /// Delete a movie by id.
    pub async fn delete_movie(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/movies/{}", id)))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, &format!("Movie {}", id)).await);
        }
        Ok(())
    }
}
