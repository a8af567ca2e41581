pub mod http;

use async_trait::async_trait;

use crate::errors::RequestError;
use crate::models::{BookingRecord, BookingRequest};

/// The booking collaborator. Creation is the core operation; the list and
/// cancel calls back the family's booking overview.
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn create_booking(&self, request: &BookingRequest)
        -> Result<BookingRecord, RequestError>;

    async fn upcoming_for_family(
        &self,
        family_user_id: i64,
    ) -> Result<Vec<BookingRecord>, RequestError>;

    async fn cancel_booking(&self, booking_id: i64) -> Result<(), RequestError>;
}
