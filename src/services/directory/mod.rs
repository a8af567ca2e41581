pub mod http;

use async_trait::async_trait;

use crate::errors::RequestError;
use crate::models::{Provider, SearchFilter};

/// The provider directory collaborator. Filtering happens service-side;
/// the client only composes the query.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn list_providers(&self, filter: &SearchFilter) -> Result<Vec<Provider>, RequestError>;

    async fn get_provider(&self, provider_id: i64) -> Result<Provider, RequestError>;
}
