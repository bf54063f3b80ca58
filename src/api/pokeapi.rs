//! PokeAPI Client
//!
//! `reqwest` over the browser fetch API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::CatalogueSource;
use crate::error::FetchError;
use crate::models::{CatalogueDetail, CataloguePage};

pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn page_url(&self, limit: u32, offset: u32) -> String {
        format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl CatalogueSource for PokeApiClient {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CataloguePage, FetchError> {
        let url = self.page_url(limit, offset);
        log::debug!("GET {}", url);
        self.get_json(&url).await
    }

    async fn fetch_detail(&self, url: &str) -> Result<CatalogueDetail, FetchError> {
        self.get_json(url).await
    }
}
