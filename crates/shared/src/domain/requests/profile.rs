use crate::model::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields of the signed-in user's profile. Only the fields that are set are
/// sent, so the backend leaves the others untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,
    #[validate(length(max = 255))]
    pub middle_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,
    #[validate(length(max = 2000))]
    pub office_notes: Option<String>,
    #[validate(range(min = 0))]
    pub cell_phone: Option<i64>,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
    #[validate(length(max = 255))]
    pub school: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 255))]
    pub apartment: Option<String>,
    #[validate(length(max = 255))]
    pub city: Option<String>,
    #[validate(length(max = 255))]
    pub state: Option<String>,
    #[validate(range(min = 0))]
    pub zip_code: Option<i64>,
}

impl UpdateProfileRequest {
    pub fn form_parts(&self) -> Vec<(String, String)> {
        let mut parts = Vec::new();
        let mut push = |name: &str, value: Option<String>| {
            if let Some(value) = value {
                parts.push((name.to_string(), value));
            }
        };

        push("first_name", self.first_name.clone());
        push("middle_name", self.middle_name.clone());
        push("last_name", self.last_name.clone());
        push("office_notes", self.office_notes.clone());
        push("cell_phone", self.cell_phone.map(|v| v.to_string()));
        push("gender", self.gender.map(|g| g.as_str().to_string()));
        push("dob", self.dob.map(|d| d.format("%Y-%m-%d").to_string()));
        push("school", self.school.clone());
        push("address", self.address.clone());
        push("apartment", self.apartment.clone());
        push("city", self.city.clone());
        push("state", self.state.clone());
        push("zip_code", self.zip_code.map(|v| v.to_string()));

        parts
    }

    pub fn is_empty(&self) -> bool {
        self.form_parts().is_empty()
    }
}
