//! HTTP Commands
//!
//! `FavoritesApi` over reqwest (the browser fetch API on wasm32).

use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use super::{Endpoints, FavoritesApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{ItemId, ItemKind, SaveMessage, SaveResponse};

/// Longest slice of a bad response body kept in a decode error
const BODY_EXCERPT_CHARS: usize = 120;

pub struct HttpFavoritesApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpFavoritesApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            endpoints: Endpoints::new(config.api_base.clone()),
        }
    }

    async fn post(&self, url: Url) -> ClientResult<Response> {
        log::debug!("POST {}", url);
        let response = self.client.post(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status: status.as_u16(), url: url.to_string() });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl FavoritesApi for HttpFavoritesApi {
    async fn toggle_save(&self, kind: ItemKind, id: &ItemId) -> ClientResult<SaveMessage> {
        let url = self.endpoints.toggle_save(kind, id)?;
        let body = self.post(url).await?.text().await?;
        decode_save_response(&body)
    }

    async fn delete_original(&self, id: &ItemId) -> ClientResult<()> {
        let url = self.endpoints.delete_original(id)?;
        self.post(url).await?;
        Ok(())
    }
}

fn decode_save_response(body: &str) -> ClientResult<SaveMessage> {
    serde_json::from_str::<SaveResponse>(body)
        .map(|resp| resp.message)
        .map_err(|e| {
            let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
            ClientError::Decode(format!("{} in {:?}", e, excerpt))
        })
}
