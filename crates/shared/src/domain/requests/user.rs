use crate::model::{Gender, Role, RoleFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FindAllUsers {
    #[serde(default)]
    pub role: RoleFilter,

    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    100
}

impl FindAllUsers {
    pub fn new(role: RoleFilter, limit: u32) -> Self {
        Self {
            role,
            limit,
            offset: 0,
        }
    }

    pub fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("role".to_string(), self.role.as_str().to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if self.offset > 0 {
            query.push(("offset".to_string(), self.offset.to_string()));
        }
        query
    }
}

/// Staff form for adding a user (usually a student) on their behalf.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "First Name is required"))]
    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Last Name is required"))]
    pub last_name: String,

    #[validate(
        email(message = "Must be a valid email"),
        length(min = 1, max = 255, message = "Email is required")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Password is required"))]
    pub password: String,

    #[serde(skip_serializing)]
    #[validate(must_match(other = "password", message = "Passwords must match"))]
    pub confirm_password: String,

    pub role: Role,

    #[validate(length(min = 1, max = 255, message = "Phone Number is required"))]
    pub cell_phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Required by the backend; optional here only so a half-filled form can
    /// be held and validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(required(message = "Gender is required"))]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(required(message = "Date of Birth is required"))]
    pub dob: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub school: Vec<String>,
}
