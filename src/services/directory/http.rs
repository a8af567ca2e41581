use async_trait::async_trait;
use serde::Deserialize;

use super::DirectoryService;
use crate::errors::RequestError;
use crate::models::{Provider, SearchFilter};
use crate::services::error_from_response;

#[derive(Deserialize)]
struct ProviderListResponse {
    providers: Vec<Provider>,
}

pub struct HttpDirectoryService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDirectoryService {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DirectoryService for HttpDirectoryService {
    async fn list_providers(&self, filter: &SearchFilter) -> Result<Vec<Provider>, RequestError> {
        let url = format!("{}/api/providers", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&filter.query_params())
            .send()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to load providers").await);
        }

        let body: ProviderListResponse = response
            .json()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;
        Ok(body.providers)
    }

    async fn get_provider(&self, provider_id: i64) -> Result<Provider, RequestError> {
        let url = format!("{}/api/providers/{provider_id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to load provider").await);
        }

        response
            .json()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))
    }
}
