use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::RequestError;
use crate::models::{BookingRecord, Provider, Service};
use crate::services::account::AccountService;
use crate::services::booking::BookingEngine;
use crate::services::bookings::http::HttpBookingService;
use crate::services::bookings::BookingService;
use crate::services::directory::http::HttpDirectoryService;
use crate::services::directory::DirectoryService;
use crate::services::search::SearchEngine;

/// One family member's view session: the collaborator handles and the
/// engines built on them. Each session owns its own engines; nothing is
/// shared across sessions.
pub struct CareSession {
    directory: Arc<dyn DirectoryService>,
    bookings: Arc<dyn BookingService>,
    account: Arc<dyn AccountService>,
}

impl CareSession {
    pub fn new(
        directory: Arc<dyn DirectoryService>,
        bookings: Arc<dyn BookingService>,
        account: Arc<dyn AccountService>,
    ) -> Self {
        Self {
            directory,
            bookings,
            account,
        }
    }

    /// Session against the HTTP collaborators at the configured base URL.
    pub fn connect(config: &AppConfig, account: Arc<dyn AccountService>) -> Self {
        Self::new(
            Arc::new(HttpDirectoryService::new(config.api_base_url.clone())),
            Arc::new(HttpBookingService::new(config.api_base_url.clone())),
            account,
        )
    }

    pub fn account(&self) -> &Arc<dyn AccountService> {
        &self.account
    }

    /// New search engine with the initial listing fetched.
    pub async fn search(&self) -> SearchEngine {
        SearchEngine::start(self.directory.clone()).await
    }

    /// New booking engine for an explicitly selected (provider, service)
    /// pair, typically the value returned by `SearchEngine::select`.
    pub fn book(&self, provider: Provider, service: Service) -> BookingEngine {
        BookingEngine::new(
            self.bookings.clone(),
            self.account.clone(),
            provider,
            service,
        )
    }

    pub async fn provider_profile(&self, provider_id: i64) -> Result<Provider, RequestError> {
        self.directory.get_provider(provider_id).await
    }

    pub async fn upcoming_bookings(&self) -> Result<Vec<BookingRecord>, RequestError> {
        self.bookings
            .upcoming_for_family(self.account.current_user_id())
            .await
    }

    pub async fn cancel_booking(&self, booking_id: i64) -> Result<(), RequestError> {
        self.bookings.cancel_booking(booking_id).await
    }
}
