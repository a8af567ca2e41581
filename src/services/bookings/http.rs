use async_trait::async_trait;
use serde::Deserialize;

use super::BookingService;
use crate::errors::RequestError;
use crate::models::{BookingRecord, BookingRequest};
use crate::services::error_from_response;

#[derive(Deserialize)]
struct UpcomingResponse {
    upcoming_bookings: Vec<BookingRecord>,
}

pub struct HttpBookingService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingService {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookingService for HttpBookingService {
    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingRecord, RequestError> {
        let url = format!("{}/api/bookings", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to create booking").await);
        }

        response
            .json()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))
    }

    async fn upcoming_for_family(
        &self,
        family_user_id: i64,
    ) -> Result<Vec<BookingRecord>, RequestError> {
        let url = format!("{}/api/bookings/upcoming", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("user_id", family_user_id.to_string()),
                ("user_type", "family".to_string()),
            ])
            .send()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to load upcoming bookings").await);
        }

        let body: UpcomingResponse = response
            .json()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;
        Ok(body.upcoming_bookings)
    }

    async fn cancel_booking(&self, booking_id: i64) -> Result<(), RequestError> {
        let url = format!("{}/api/bookings/{booking_id}", self.base_url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to cancel booking").await);
        }

        Ok(())
    }
}
