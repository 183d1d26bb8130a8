use crate::{
    domain::responses::SchoolResponse,
    model::{Gender, Role},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default = "active")]
    pub is_active: bool,
    pub role: Role,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn active() -> bool {
    true
}

impl UserResponse {
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserList {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub users: Vec<UserResponse>,
}

impl UserList {
    /// Drops `id` from the page. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        let removed = before != self.users.len();
        if removed {
            self.total_count = self.total_count.saturating_sub(1);
        }
        removed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub school: Vec<SchoolResponse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<i64>,
    #[serde(default)]
    pub contact_relationship: Option<String>,
    #[serde(default)]
    pub contact_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickupLocation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub apartment: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileDetails {
    #[serde(default)]
    pub office_note: Option<String>,
    #[serde(default)]
    pub cell_phone: Option<i64>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub apartment: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<i64>,
    #[serde(default)]
    pub certificate_received: Option<bool>,
    #[serde(default)]
    pub contact_information: Vec<ContactEntry>,
    #[serde(default)]
    pub pickup_location: Vec<PickupLocation>,
}

/// `GET /profile/get` payload: the account plus its profile sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user: ProfileUser,
    #[serde(default)]
    pub profile: ProfileDetails,
}

impl UserProfile {
    pub fn role(&self) -> Role {
        self.user.role
    }
}
