use serde::{Deserialize, Serialize};

use super::service::{Service, ServiceCategory};

/// Name of the person behind an individual provider listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderUser {
    pub first_name: String,
    pub last_name: String,
}

/// A caregiving business or individual as returned by the directory
/// service. Immutable for the duration of a view session.
///
/// At most one of `hourly_rate` / `daily_rate` is populated; the directory
/// owns that invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub id: i64,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub user: Option<ProviderUser>,
    #[serde(rename = "provider_type")]
    pub category: ServiceCategory,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: i64,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Provider {
    /// Business name when present, otherwise the owner's name.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.business_name {
            return name.clone();
        }
        match &self.user {
            Some(user) => format!("{} {}", user.first_name, user.last_name),
            None => format!("Provider #{}", self.id),
        }
    }

    /// Price text for a result card. Hourly rate wins over daily rate;
    /// providers with neither quote on request.
    pub fn price_label(&self) -> String {
        if let Some(rate) = self.hourly_rate {
            format!("${rate}/hour")
        } else if let Some(rate) = self.daily_rate {
            format!("${rate}/day")
        } else {
            "Contact for pricing".to_string()
        }
    }
}
