//! Mutation coordinators.
//!
//! A store owns one [`ApiClient`](crate::client::ApiClient) handle, the
//! cache for its record kind, and a render callback, and keeps the three
//! consistent across refreshes, saves, and deletes. Stores are single-owner:
//! every operation takes `&mut self`, so two operations on the same store
//! can never overlap.

mod movies;
mod persons;

pub use movies::MovieStore;
pub use persons::PersonStore;

/// Render callback invoked with the full record page after every cache
/// change.
pub type RenderFn<T> = Box<dyn FnMut(&[T]) + Send>;

/// Lifecycle of the current (or most recent) save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Save failed; carries the error message for the edit surface
    Failed(String),
}

/// Result of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The confirmation gate declined; no request was sent
    Cancelled,
}
