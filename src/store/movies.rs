//! Movie list coordinator.

use crate::cache::PageCache;
use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::events::RemoteChange;
use crate::models::{Movie, MovieForm, MoviePayload, PersonRef};
use crate::query::MovieQuery;

use super::{DeleteOutcome, RenderFn, SubmitState};

/// Keeps the local movie page consistent with the server.
///
/// The query state lives inside the store; callers adjust it through
/// [`query_mut`](Self::query_mut) and then call [`refresh`](Self::refresh).
/// A refresh that fails leaves the previously cached page untouched.
pub struct MovieStore {
    api: ApiClient,
    query: MovieQuery,
    cache: PageCache<Movie>,
    submit: SubmitState,
    on_render: RenderFn<Movie>,
}

impl MovieStore {
    pub fn new(api: ApiClient, on_render: impl FnMut(&[Movie]) + Send + 'static) -> Self {
        Self {
            api,
            query: MovieQuery::new(),
            cache: PageCache::new(),
            submit: SubmitState::Idle,
            on_render: Box::new(on_render),
        }
    }

    pub fn query(&self) -> &MovieQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut MovieQuery {
        &mut self.query
    }

    /// Currently cached page, in render order.
    pub fn records(&self) -> &[Movie] {
        self.cache.records()
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    /// Fetch the page selected by the current query and install it.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let records = self.api.list_movies(&self.query).await?;
        self.cache.replace_all(records);
        (self.on_render)(self.cache.records());
        Ok(())
    }

    /// Save an edit form: resolve person references, then create or update
    /// depending on `form.id`.
    ///
    /// On success the server's canonical record (never the form values) is
    /// upserted into the cache. On failure the cache is untouched and the
    /// error is returned for the edit surface to display; [`submit_state`]
    /// mirrors the outcome either way.
    ///
    /// [`submit_state`]: Self::submit_state
    pub async fn save(&mut self, form: &MovieForm) -> Result<Movie, ApiError> {
        self.submit = SubmitState::Submitting;
        let result = self.submit_form(form).await;
        match &result {
            Ok(movie) => {
                self.submit = SubmitState::Succeeded;
                self.cache.upsert(movie.clone());
                (self.on_render)(self.cache.records());
            }
            Err(err) => {
                self.submit = SubmitState::Failed(err.message());
            }
        }
        result
    }

    /// Delete a movie after the confirmation gate approves it.
    ///
    /// A declined confirmation sends no request. A server-side failure,
    /// including `NotFound` for a record deleted elsewhere, is surfaced and
    /// leaves the cache untouched.
    pub async fn delete(
        &mut self,
        id: i64,
        confirm: impl FnOnce(i64) -> bool,
    ) -> Result<DeleteOutcome, ApiError> {
        if !confirm(id) {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.api.delete_movie(id).await?;
        self.cache.remove_by_id(id);
        (self.on_render)(self.cache.records());
        Ok(DeleteOutcome::Deleted)
    }

    /// React to a server push notification with exactly one re-fetch of the
    /// current query. The event payload is advisory only and never applied
    /// directly.
    pub async fn apply_remote_change(&mut self, change: &RemoteChange) -> Result<(), ApiError> {
        tracing::debug!(
            "Remote change {} ({}), refreshing movie page",
            change.kind.as_str(),
            change.data
        );
        self.refresh().await
    }

    async fn submit_form(&self, form: &MovieForm) -> Result<Movie, ApiError> {
        let operator_id = form.operator_id.ok_or_else(|| {
            ApiError::ReferenceResolution(
                "Movie needs an operator before it can be saved".to_string(),
            )
        })?;

        let operator = self.resolve_person("operator", operator_id).await?;
        let director = match form.director_id {
            Some(id) => Some(self.resolve_person("director", id).await?),
            None => None,
        };
        let screenwriter = match form.screenwriter_id {
            Some(id) => Some(self.resolve_person("screenwriter", id).await?),
            None => None,
        };

        let payload = MoviePayload {
            name: form.name.clone(),
            genre: form.genre.clone(),
            mpaa_rating: form.mpaa_rating.clone(),
            oscars_count: form.oscars_count,
            budget: form.budget,
            total_box_office: form.total_box_office,
            length: form.length,
            golden_palm_count: form.golden_palm_count,
            coordinates: form.coordinates.clone(),
            operator,
            director,
            screenwriter,
        };

        match form.id {
            Some(id) => self.api.update_movie(id, &payload).await,
            None => self.api.create_movie(&payload).await,
        }
    }

    /// Fetch a fresh snapshot for a referenced person id.
    async fn resolve_person(&self, field: &str, id: i64) -> Result<PersonRef, ApiError> {
        match self.api.get_person(id).await {
            Ok(person) => Ok(PersonRef::from(&person)),
            Err(err) if err.is_not_found() => Err(ApiError::ReferenceResolution(format!(
                "Cannot save movie: {} {} does not exist",
                field, id
            ))),
            Err(err) => Err(err),
        }
    }
}
