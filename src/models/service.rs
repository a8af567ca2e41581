use serde::{Deserialize, Serialize};

/// Care category offered by a provider. Values match the directory
/// service's wire strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    HomeCare,
    AdultDayCare,
    PersonalCare,
    MedicalServices,
    PharmacyServices,
    Companionship,
    Transportation,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::HomeCare => "home_care",
            ServiceCategory::AdultDayCare => "adult_day_care",
            ServiceCategory::PersonalCare => "personal_care",
            ServiceCategory::MedicalServices => "medical_services",
            ServiceCategory::PharmacyServices => "pharmacy_services",
            ServiceCategory::Companionship => "companionship",
            ServiceCategory::Transportation => "transportation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::HomeCare => "In-Home Care",
            ServiceCategory::AdultDayCare => "Adult Day Care",
            ServiceCategory::PersonalCare => "Personal Care",
            ServiceCategory::MedicalServices => "Medical Services",
            ServiceCategory::PharmacyServices => "Pharmacy Services",
            ServiceCategory::Companionship => "Companionship",
            ServiceCategory::Transportation => "Transportation",
        }
    }
}

/// A priced, time-boxed offering of a provider. Owned by the directory
/// service; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub service_type: Option<ServiceCategory>,
    #[serde(default)]
    pub description: Option<String>,
    /// Hourly unit price. Absent when the provider quotes on request.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}
