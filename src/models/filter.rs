use super::service::ServiceCategory;

/// Minimum-rating steps offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFloor {
    ThreePointFive,
    Four,
    FourPointFive,
}

impl RatingFloor {
    pub fn threshold(&self) -> f64 {
        match self {
            RatingFloor::ThreePointFive => 3.5,
            RatingFloor::Four => 4.0,
            RatingFloor::FourPointFive => 4.5,
        }
    }

    /// Wire string for the `min_rating` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingFloor::ThreePointFive => "3.5",
            RatingFloor::Four => "4.0",
            RatingFloor::FourPointFive => "4.5",
        }
    }
}

/// Provider search criteria. Every field is independently optional; an
/// unset field imposes no constraint and is omitted from the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub city: Option<String>,
    pub category: Option<ServiceCategory>,
    pub min_rating: Option<RatingFloor>,
    pub verified_only: bool,
}

impl SearchFilter {
    /// Query parameters for the directory listing endpoint. The engine does
    /// no client-side re-filtering; this is the whole query.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(city) = &self.city {
            params.push(("city", city.clone()));
        }
        if let Some(category) = self.category {
            params.push(("service_type", category.as_str().to_string()));
        }
        if let Some(floor) = self.min_rating {
            params.push(("min_rating", floor.as_str().to_string()));
        }
        if self.verified_only {
            params.push(("verified_only", "true".to_string()));
        }
        params
    }
}
