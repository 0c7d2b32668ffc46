use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ItemCache;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Envelope, Item, ItemDraft, PurchasedFlag};

/// Typed client for the shopping list API
///
/// Every call that succeeds is mirrored into the local [`ItemCache`]. A call
/// that fails leaves the cached items alone and marks the cache stale.
#[derive(Debug, Clone)]
pub struct ShoppingListClient {
    http: Client,
    base_url: String,
    cache: ItemCache,
}

impl ShoppingListClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: ClientConfig) -> Self {
        Self {
            http,
            base_url: config.base_url,
            cache: ItemCache::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ItemCache {
        &self.cache
    }

    /// Mark the mirror stale; the next [`refresh`](Self::refresh) reloads it
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Reload the whole list from the server
    pub async fn refresh(&mut self) -> ClientResult<&[Item]> {
        self.fetch_items().await
    }

    pub async fn fetch_items(&mut self) -> ClientResult<&[Item]> {
        let result = self.get_items().await;
        let items = self.track(result)?;
        debug!(count = items.len(), "Fetched items");
        self.cache.replace_all(items);
        Ok(self.cache.items())
    }

    pub async fn add_item(&mut self, draft: &ItemDraft) -> ClientResult<&[Item]> {
        let result = self.post_item(draft).await;
        let items = self.track(result)?;
        self.cache.replace_all(items);
        Ok(self.cache.items())
    }

    /// Flag an item as purchased; there is no way back from the client side
    pub async fn mark_purchased(&mut self, id: u64) -> ClientResult<Item> {
        let result = self.patch_purchased(id).await;
        let item = self.track(result)?;
        self.cache.mark_purchased(item.id);
        Ok(item)
    }

    pub async fn edit_item(&mut self, id: u64, draft: &ItemDraft) -> ClientResult<Item> {
        let result = self.put_item(id, draft).await;
        let item = self.track(result)?;
        self.cache.merge(item.clone());
        Ok(item)
    }

    pub async fn delete_item(&mut self, id: u64) -> ClientResult<String> {
        let result = self.send_delete(id).await;
        let message = self.track(result)?;
        self.cache.remove(id);
        Ok(message)
    }

    fn track<T>(&mut self, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(e) = &result {
            warn!(error = %e, "Shopping list request failed");
            self.cache.invalidate();
        }
        result
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/items/{}", self.base_url, id)
    }

    async fn get_items(&self) -> ClientResult<Vec<Item>> {
        let response = self.http.get(self.items_url()).send().await?;
        let response = ensure_success(response).await?;
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn post_item(&self, draft: &ItemDraft) -> ClientResult<Vec<Item>> {
        let response = self.http.post(self.items_url()).json(draft).send().await?;
        expect_data(response).await
    }

    async fn patch_purchased(&self, id: u64) -> ClientResult<Item> {
        let response = self
            .http
            .patch(self.item_url(id))
            .json(&PurchasedFlag { is_purchased: true })
            .send()
            .await?;
        expect_data(response).await
    }

    async fn put_item(&self, id: u64, draft: &ItemDraft) -> ClientResult<Item> {
        let response = self.http.put(self.item_url(id)).json(draft).send().await?;
        expect_data(response).await
    }

    async fn send_delete(&self, id: u64) -> ClientResult<String> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        let envelope = read_envelope::<serde_json::Value>(response).await?;
        Ok(envelope.message.unwrap_or_default())
    }
}

impl Default for ShoppingListClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

/// Turn a non-2xx response into [`ClientError::Api`], using the server's
/// message when the body carries one
async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    Err(ClientError::Api { status, message })
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> ClientResult<Envelope<T>> {
    let response = ensure_success(response).await?;
    let status = response.status();
    let envelope = response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    if !envelope.is_success() {
        return Err(ClientError::Api {
            status,
            message: envelope.message.unwrap_or_default(),
        });
    }
    Ok(envelope)
}

async fn expect_data<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    read_envelope::<T>(response)
        .await?
        .data
        .ok_or_else(|| ClientError::Decode("response envelope has no data".to_string()))
}
