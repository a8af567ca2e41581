use serde::{Deserialize, Serialize};

/// A care recipient on the family's account. Owned by the account
/// collaborator; only the id ever leaves the client in a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Elder {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    #[serde(default)]
    pub medical_conditions: Option<String>,
}

impl Elder {
    /// Label used by elder pickers, e.g. "Robert Johnson (Age 83)".
    pub fn display_label(&self) -> String {
        format!("{} {} (Age {})", self.first_name, self.last_name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let elder = Elder {
            id: 1,
            first_name: "Robert".to_string(),
            last_name: "Johnson".to_string(),
            age: 83,
            medical_conditions: Some("Diabetes, Hypertension".to_string()),
        };
        assert_eq!(elder.display_label(), "Robert Johnson (Age 83)");
    }
}
