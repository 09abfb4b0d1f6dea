//! Client-side data synchronization for the MovieLab movies API.
//!
//! The crate keeps a render-ready local view of paginated movie and person
//! records consistent with a remote REST server: a typed fetch layer
//! ([`client::ApiClient`]), list query state ([`query::MovieQuery`]), a
//! page cache ([`cache::PageCache`]), mutation coordinators
//! ([`store::MovieStore`], [`store::PersonStore`]), and a server-push
//! listener ([`events::EventListener`]) that triggers re-fetches when other
//! clients change the data.

pub mod cache;
pub mod client;
pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod query;
pub mod store;

pub use cache::{Identified, PageCache};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use errors::ApiError;
pub use events::{ChangeKind, EventListener, RemoteChange};
pub use query::{FilterField, MovieQuery, SortKey, SortOrder};
pub use store::{DeleteOutcome, MovieStore, PersonStore, SubmitState};
