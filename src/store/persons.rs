//! Person list coordinator.

use crate::cache::PageCache;
use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{Person, PersonForm};

use super::{DeleteOutcome, RenderFn, SubmitState};

/// Keeps the local person list consistent with the server.
///
/// The persons endpoint is unpaged and returns records in no particular
/// order, so a refresh sorts by id before installing the list.
pub struct PersonStore {
    api: ApiClient,
    cache: PageCache<Person>,
    submit: SubmitState,
    on_render: RenderFn<Person>,
}

impl PersonStore {
    pub fn new(api: ApiClient, on_render: impl FnMut(&[Person]) + Send + 'static) -> Self {
        Self {
            api,
            cache: PageCache::new(),
            submit: SubmitState::Idle,
            on_render: Box::new(on_render),
        }
    }

    /// Currently cached list, ordered by id.
    pub fn records(&self) -> &[Person] {
        self.cache.records()
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    /// Fetch all persons and install them ordered by id.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let mut records = self.api.list_persons().await?;
        records.sort_by_key(|p| p.id);
        self.cache.replace_all(records);
        (self.on_render)(self.cache.records());
        Ok(())
    }

    /// Save an edit form: create or update depending on `form.id`.
    ///
    /// On success the server's canonical record is upserted into the cache;
    /// on failure the cache is untouched and the error is returned.
    pub async fn save(&mut self, form: &PersonForm) -> Result<Person, ApiError> {
        self.submit = SubmitState::Submitting;
        let payload = form.to_payload();
        let result = match form.id {
            Some(id) => self.api.update_person(id, &payload).await,
            None => self.api.create_person(&payload).await,
        };
        match &result {
            Ok(person) => {
                self.submit = SubmitState::Succeeded;
                self.cache.upsert(person.clone());
                (self.on_render)(self.cache.records());
            }
            Err(err) => {
                self.submit = SubmitState::Failed(err.message());
            }
        }
        result
    }

    /// Delete a person after the confirmation gate approves it.
    pub async fn delete(
        &mut self,
        id: i64,
        confirm: impl FnOnce(i64) -> bool,
    ) -> Result<DeleteOutcome, ApiError> {
        if !confirm(id) {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.api.delete_person(id).await?;
        self.cache.remove_by_id(id);
        (self.on_render)(self.cache.records());
        Ok(DeleteOutcome::Deleted)
    }
}
