use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::service::Service;

/// Durations offered by the booking form, in minutes.
pub const DURATION_CHOICES: [u32; 7] = [30, 60, 90, 120, 180, 240, 480];

/// Menu label for a duration choice. `None` for off-menu values.
pub fn duration_label(minutes: u32) -> Option<&'static str> {
    match minutes {
        30 => Some("30 minutes"),
        60 => Some("1 hour"),
        90 => Some("1.5 hours"),
        120 => Some("2 hours"),
        180 => Some("3 hours"),
        240 => Some("4 hours"),
        480 => Some("8 hours (full day)"),
        _ => None,
    }
}

/// The bookable time-of-day grid: every half hour from 08:00 through 18:00.
pub fn time_slots() -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    for half_hours in 0..=20 {
        let minutes_past_eight = half_hours * 30;
        if let Some(time) =
            NaiveTime::from_hms_opt(8 + minutes_past_eight / 60, minutes_past_eight % 60, 0)
        {
            slots.push(time);
        }
    }
    slots
}

fn historical_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Whether a date picker should offer `date`. Dates strictly before
/// `today` or before the 1900-01-01 floor are not selectable. Enforced at
/// the input layer; `BookingDraft::validate` does not re-check it.
pub fn date_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date >= historical_floor()
}

/// The in-progress booking request for one (provider, service) pair.
///
/// Created when the pair is selected, mutated field by field, and discarded
/// on confirmation or cancellation. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub provider_id: i64,
    pub service_id: i64,
    pub elder_id: Option<i64>,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    pub duration_minutes: Option<u32>,
    pub special_instructions: String,
}

impl BookingDraft {
    /// Fresh draft for a selected service. The duration starts at the
    /// service's default when that value is on the menu, else one hour.
    pub fn new(provider_id: i64, service: &Service) -> Self {
        let duration = service
            .duration_minutes
            .filter(|minutes| DURATION_CHOICES.contains(minutes))
            .unwrap_or(60);
        Self {
            provider_id,
            service_id: service.id,
            elder_id: None,
            scheduled_date: None,
            scheduled_time: None,
            duration_minutes: Some(duration),
            special_instructions: String::new(),
        }
    }

    /// First violated rule, checked in fixed order: elder, date, time,
    /// duration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.elder_id.is_none() {
            return Err(ValidationError::MissingElder);
        }
        if self.scheduled_date.is_none() {
            return Err(ValidationError::MissingDate);
        }
        if self.scheduled_time.is_none() {
            return Err(ValidationError::MissingTime);
        }
        match self.duration_minutes {
            Some(minutes) if DURATION_CHOICES.contains(&minutes) => Ok(()),
            _ => Err(ValidationError::MissingDuration),
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Date and time-of-day combined into one local timestamp. No timezone
    /// conversion.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        match (self.scheduled_date, self.scheduled_time) {
            (Some(date), Some(time)) => Some(date.and_time(time)),
            _ => None,
        }
    }

    /// Validated wire request for the booking service.
    pub fn to_request(&self, family_user_id: i64) -> Result<BookingRequest, ValidationError> {
        self.validate()?;
        let elder_id = self.elder_id.ok_or(ValidationError::MissingElder)?;
        let scheduled_date = self.scheduled_at().ok_or(ValidationError::MissingDate)?;
        let duration_minutes = self
            .duration_minutes
            .ok_or(ValidationError::MissingDuration)?;
        Ok(BookingRequest {
            family_user_id,
            provider_id: self.provider_id,
            service_id: self.service_id,
            elder_id,
            scheduled_date,
            duration_minutes,
            special_instructions: self.special_instructions.clone(),
        })
    }
}

/// Request body for creating a booking. `scheduled_date` serializes as an
/// ISO-8601 local timestamp without offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub family_user_id: i64,
    pub provider_id: i64,
    pub service_id: i64,
    pub elder_id: i64,
    pub scheduled_date: NaiveDateTime,
    pub duration_minutes: u32,
    pub special_instructions: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// A booking as the booking service reports it back: the confirmation
/// payload for a new request, and the element type of the upcoming list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    pub id: i64,
    pub status: BookingStatus,
    pub scheduled_date: NaiveDateTime,
    pub duration_minutes: u32,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(default_duration: Option<u32>) -> Service {
        Service {
            id: 10,
            name: "In-Home Nursing Care".to_string(),
            service_type: None,
            description: None,
            price: Some(45.0),
            duration_minutes: default_duration,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn test_time_slot_grid() {
        let slots = time_slots();
        assert_eq!(slots.len(), 21);
        assert_eq!(slots[0], time("08:00"));
        assert_eq!(slots[1], time("08:30"));
        assert_eq!(slots[20], time("18:00"));
    }

    #[test]
    fn test_duration_defaults_to_service_duration() {
        let draft = BookingDraft::new(1, &service(Some(90)));
        assert_eq!(draft.duration_minutes, Some(90));
    }

    #[test]
    fn test_off_menu_service_duration_falls_back_to_an_hour() {
        let draft = BookingDraft::new(1, &service(Some(45)));
        assert_eq!(draft.duration_minutes, Some(60));
    }

    #[test]
    fn test_missing_service_duration_falls_back_to_an_hour() {
        let draft = BookingDraft::new(1, &service(None));
        assert_eq!(draft.duration_minutes, Some(60));
    }

    #[test]
    fn test_validate_reports_elder_before_date() {
        // Missing both elder and date: the elder rule wins.
        let draft = BookingDraft::new(1, &service(None));
        assert_eq!(draft.validate(), Err(ValidationError::MissingElder));
    }

    #[test]
    fn test_validate_order_walks_the_fields() {
        let mut draft = BookingDraft::new(1, &service(None));
        draft.elder_id = Some(1);
        assert_eq!(draft.validate(), Err(ValidationError::MissingDate));
        draft.scheduled_date = Some(date("2025-06-01"));
        assert_eq!(draft.validate(), Err(ValidationError::MissingTime));
        draft.scheduled_time = Some(time("09:00"));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_off_menu_duration() {
        let mut draft = BookingDraft::new(1, &service(None));
        draft.elder_id = Some(1);
        draft.scheduled_date = Some(date("2025-06-01"));
        draft.scheduled_time = Some(time("09:00"));
        draft.duration_minutes = Some(45);
        assert_eq!(draft.validate(), Err(ValidationError::MissingDuration));
        draft.duration_minutes = None;
        assert_eq!(draft.validate(), Err(ValidationError::MissingDuration));
    }

    #[test]
    fn test_to_request_composes_local_timestamp() {
        let mut draft = BookingDraft::new(2, &service(None));
        draft.elder_id = Some(1);
        draft.scheduled_date = Some(date("2025-06-01"));
        draft.scheduled_time = Some(time("09:00"));

        let request = draft.to_request(7).unwrap();
        assert_eq!(request.family_user_id, 7);
        assert_eq!(request.provider_id, 2);
        assert_eq!(request.elder_id, 1);
        assert_eq!(request.duration_minutes, 60);
        assert_eq!(request.scheduled_date, date("2025-06-01").and_time(time("09:00")));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["scheduled_date"], "2025-06-01T09:00:00");
    }

    #[test]
    fn test_to_request_surfaces_first_violation() {
        let draft = BookingDraft::new(2, &service(None));
        assert_eq!(draft.to_request(7), Err(ValidationError::MissingElder));
    }

    #[test]
    fn test_date_selectable_bounds() {
        let today = date("2026-08-07");
        assert!(!date_selectable(date("2026-08-06"), today));
        assert!(date_selectable(today, today));
        assert!(date_selectable(date("2026-08-08"), today));
        assert!(!date_selectable(date("1899-12-31"), date("1899-12-30")));
    }

    #[test]
    fn test_duration_labels() {
        assert_eq!(duration_label(30), Some("30 minutes"));
        assert_eq!(duration_label(480), Some("8 hours (full day)"));
        assert_eq!(duration_label(45), None);
    }

    #[test]
    fn test_booking_record_deserializes_service_payload() {
        let json = r#"{
            "id": 42,
            "family_user_id": 1,
            "provider_id": 2,
            "service_id": 10,
            "elder_id": 1,
            "scheduled_date": "2025-06-01T09:00:00",
            "duration_minutes": 60,
            "status": "pending",
            "total_cost": 45.0,
            "special_instructions": ""
        }"#;
        let record: BookingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.status, BookingStatus::Pending);
        assert_eq!(record.total_cost, Some(45.0));
    }
}
