use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::models::booking::{time_slots, DURATION_CHOICES};
use crate::models::{BookingDraft, BookingRecord, Provider, Service};
use crate::services::account::AccountService;
use crate::services::bookings::BookingService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    Draft,
    Submitting,
    Confirmed,
}

/// Booking workflow for one selected (provider, service) pair.
///
/// The draft is edited field by field while in `Draft`; `submit` moves
/// through `Submitting` and either reaches the terminal `Confirmed` or
/// falls back to `Draft` with the failure message and the fields intact.
pub struct BookingEngine {
    bookings: Arc<dyn BookingService>,
    account: Arc<dyn AccountService>,
    provider: Provider,
    service: Service,
    draft: BookingDraft,
    phase: BookingPhase,
    error: Option<String>,
    confirmation: Option<BookingRecord>,
}

impl BookingEngine {
    pub fn new(
        bookings: Arc<dyn BookingService>,
        account: Arc<dyn AccountService>,
        provider: Provider,
        service: Service,
    ) -> Self {
        let draft = BookingDraft::new(provider.id, &service);
        Self {
            bookings,
            account,
            provider,
            service,
            draft,
            phase: BookingPhase::Draft,
            error: None,
            confirmation: None,
        }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn phase(&self) -> BookingPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The confirmation payload once the phase is `Confirmed`.
    pub fn confirmation(&self) -> Option<&BookingRecord> {
        self.confirmation.as_ref()
    }

    fn editing(&mut self) -> bool {
        if self.phase != BookingPhase::Draft {
            return false;
        }
        self.error = None;
        true
    }

    pub fn set_elder(&mut self, elder_id: i64) {
        if self.editing() {
            self.draft.elder_id = Some(elder_id);
        }
    }

    /// Callers should disable unselectable dates up front with
    /// `models::booking::date_selectable`; the engine applies what it is
    /// given.
    pub fn set_date(&mut self, date: NaiveDate) {
        if self.editing() {
            self.draft.scheduled_date = Some(date);
        }
    }

    /// Only times on the half-hour grid are applied.
    pub fn set_time(&mut self, time: NaiveTime) {
        if self.editing() && time_slots().contains(&time) {
            self.draft.scheduled_time = Some(time);
        }
    }

    /// Only menu durations are applied.
    pub fn set_duration(&mut self, minutes: u32) {
        if self.editing() && DURATION_CHOICES.contains(&minutes) {
            self.draft.duration_minutes = Some(minutes);
        }
    }

    pub fn set_instructions(&mut self, text: impl Into<String>) {
        if self.editing() {
            self.draft.special_instructions = text.into();
        }
    }

    /// Total cost of the draft as currently configured: unit price times
    /// hours, rounded to cents. Zero when price or duration is absent.
    /// Recomputed on every call, never cached.
    pub fn derived_cost(&self) -> f64 {
        derived_cost(self.service.price, self.draft.duration_minutes)
    }

    pub fn validate(&self) -> Result<(), crate::errors::ValidationError> {
        self.draft.validate()
    }

    /// Submits the draft. Invalid drafts surface the first violated rule
    /// and never reach the network. One submission in flight at a time;
    /// repeat calls while `Submitting` or after `Confirmed` are no-ops.
    pub async fn submit(&mut self) {
        if self.phase != BookingPhase::Draft {
            return;
        }

        let request = match self.draft.to_request(self.account.current_user_id()) {
            Ok(request) => request,
            Err(rule) => {
                self.error = Some(rule.to_string());
                return;
            }
        };

        self.phase = BookingPhase::Submitting;
        self.error = None;
        tracing::info!(
            provider_id = request.provider_id,
            service_id = request.service_id,
            scheduled = %request.scheduled_date,
            "submitting booking request"
        );

        match self.bookings.create_booking(&request).await {
            Ok(record) => {
                tracing::info!(booking_id = record.id, "booking confirmed");
                self.phase = BookingPhase::Confirmed;
                self.confirmation = Some(record);
            }
            Err(err) => {
                tracing::warn!(error = err.detail(), "booking submission failed");
                self.phase = BookingPhase::Draft;
                self.error = Some(err.to_string());
            }
        }
    }
}

/// `unit price × (duration / 60)`, rounded to 2 decimal places.
pub fn derived_cost(unit_price: Option<f64>, duration_minutes: Option<u32>) -> f64 {
    let (Some(price), Some(minutes)) = (unit_price, duration_minutes) else {
        return 0.0;
    };
    if minutes == 0 {
        return 0.0;
    }
    (price * (minutes as f64 / 60.0) * 100.0).round() / 100.0
}
