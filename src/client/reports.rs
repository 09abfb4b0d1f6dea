//! Aggregate report operations.
//!
//! The report endpoints return server-shaped JSON with no stable schema, so
//! results are passed through as [`serde_json::Value`] for the caller to
//! render.

use serde_json::Value;

use crate::errors::ApiError;
use crate::models::MovieGenre;

use super::ApiClient;

impl ApiClient {
    /// Movie counts grouped by MPAA rating.
    pub async fn group_by_mpaa(&self) -> Result<Value, ApiError> {
        self.report("/movies/group-by-mpaa", &[]).await
    }

    /// Count of movies with a genre above the threshold.
    pub async fn count_genre_gt(&self, threshold: &MovieGenre) -> Result<Value, ApiError> {
        self.report("/movies/count-genre-gt", &[("threshold", threshold.as_str())])
            .await
    }

    /// Movies with a genre below the threshold.
    pub async fn movies_genre_lt(&self, threshold: &MovieGenre) -> Result<Value, ApiError> {
        self.report("/movies/movies-genre-lt", &[("threshold", threshold.as_str())])
            .await
    }

    /// Movies that have never won an Oscar.
    pub async fn zero_oscars(&self) -> Result<Value, ApiError> {
        self.report("/movies/zero-oscars", &[]).await
    }

    /// Operators all of whose movies have zero Oscars.
    pub async fn operators_zero_oscars(&self) -> Result<Value, ApiError> {
        self.report("/movies/operators-zero-oscars", &[]).await
    }

    async fn report(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let mut req = self.http.get(self.url(path));
        if !params.is_empty() {
            req = req.query(params);
        }
        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, "Report").await);
        }
        Ok(resp.json().await?)
    }
}
