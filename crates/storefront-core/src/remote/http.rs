//! HTTP Item Remote
//!
//! `ItemRemote` over a REST collection:
//! `GET /`, `GET /{id}`, `POST /`, `PUT /{id}`, `DELETE /{id}`.

use async_trait::async_trait;
use reqwest::Client;

use super::error::RemoteResult;
use super::traits::ItemRemote;
use crate::domain::{Item, ItemPatch, NewItem};

/// REST client for the item collection
#[derive(Debug, Clone)]
pub struct HttpItemRemote {
    client: Client,
    base_url: String,
}

impl HttpItemRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait(?Send)]
impl ItemRemote for HttpItemRemote {
    async fn list(&self) -> RemoteResult<Vec<Item>> {
        let response = self.client.get(&self.base_url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: u32) -> RemoteResult<Item> {
        let response = self.client.get(self.item_url(id)).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create(&self, item: &NewItem) -> RemoteResult<Item> {
        let response = self
            .client
            .post(&self.base_url)
            .json(item)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: u32, patch: &ItemPatch) -> RemoteResult<Item> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: u32) -> RemoteResult<()> {
        self.client
            .delete(self.item_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
