//! Favorites API Commands
//!
//! Client side of the remote favorites API, organized by concern.

mod endpoints;
mod http;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{ItemId, ItemKind, SaveMessage};

pub use endpoints::Endpoints;
pub use http::HttpFavoritesApi;

/// Remote operations the page controls trigger
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait FavoritesApi {
    /// `POST /drinks/save/{id}` or `POST /ingredients/save/{id}`
    async fn toggle_save(&self, kind: ItemKind, id: &ItemId) -> ClientResult<SaveMessage>;

    /// `POST /users/original/delete/{id}`; the response body is ignored
    async fn delete_original(&self, id: &ItemId) -> ClientResult<()>;
}
