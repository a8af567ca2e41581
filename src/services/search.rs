use std::sync::Arc;

use crate::models::{Provider, RatingFloor, SearchFilter, Service, ServiceCategory};
use crate::services::directory::DirectoryService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Ready,
}

/// Provider search for one view session: filter state, a depth-one result
/// cache, and the fetch lifecycle. All filtering is delegated to the
/// directory via the composed query.
pub struct SearchEngine {
    directory: Arc<dyn DirectoryService>,
    filter: SearchFilter,
    providers: Vec<Provider>,
    status: SearchStatus,
    error: Option<String>,
}

impl SearchEngine {
    pub fn new(directory: Arc<dyn DirectoryService>) -> Self {
        Self {
            directory,
            filter: SearchFilter::default(),
            providers: Vec::new(),
            status: SearchStatus::Idle,
            error: None,
        }
    }

    /// New engine with the initial listing already fetched, so results show
    /// without user action.
    pub async fn start(directory: Arc<dyn DirectoryService>) -> Self {
        let mut engine = Self::new(directory);
        engine.search().await;
        engine
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Empty and whitespace-only input counts as unset.
    pub fn set_city(&mut self, city: Option<String>) {
        self.filter.city = city.filter(|c| !c.trim().is_empty());
        self.error = None;
    }

    pub fn set_category(&mut self, category: Option<ServiceCategory>) {
        self.filter.category = category;
        self.error = None;
    }

    pub fn set_min_rating(&mut self, floor: Option<RatingFloor>) {
        self.filter.min_rating = floor;
        self.error = None;
    }

    pub fn set_verified_only(&mut self, verified_only: bool) {
        self.filter.verified_only = verified_only;
        self.error = None;
    }

    /// Fetches a fresh listing for the current filter. On failure the
    /// previous results stay and the error message is recorded; the engine
    /// always lands back in `Ready`.
    pub async fn search(&mut self) {
        self.status = SearchStatus::Loading;
        self.error = None;

        match self.directory.list_providers(&self.filter).await {
            Ok(providers) => {
                tracing::info!(count = providers.len(), "provider search completed");
                self.providers = providers;
            }
            Err(err) => {
                tracing::warn!(error = err.detail(), "provider search failed");
                self.error = Some(err.to_string());
            }
        }

        self.status = SearchStatus::Ready;
    }

    /// Selection event for a result card: returns the (provider, service)
    /// pair by value for hand-off to a fresh `BookingEngine`.
    pub fn select(&self, provider_id: i64, service_id: i64) -> Option<(Provider, Service)> {
        let provider = self.providers.iter().find(|p| p.id == provider_id)?;
        let service = provider.services.iter().find(|s| s.id == service_id)?;
        Some((provider.clone(), service.clone()))
    }
}
