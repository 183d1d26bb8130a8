use crate::model::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        email(message = "Must be a valid email"),
        length(min = 1, max = 255, message = "Email is required")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    /// The login endpoint takes an OAuth2 password form, which names the
    /// email field `username`.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("username".to_string(), self.email.clone()),
            ("password".to_string(), self.password.clone()),
        ]
    }
}

/// Self-service sign-up form. Everyone who registers is a student.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "First Name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255, message = "Last Name is required"))]
    pub last_name: String,

    #[validate(
        email(message = "Must be a valid email"),
        length(min = 1, max = 255, message = "Email is required")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Phone Number is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 255, message = "Password is required"))]
    pub password: String,

    #[validate(
        must_match(other = "password", message = "Passwords must match"),
        length(min = 1, max = 255, message = "Confirm Password is required")
    )]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl From<&RegisterRequest> for RegisterPayload {
    fn from(value: &RegisterRequest) -> Self {
        RegisterPayload {
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            email: value.email.clone(),
            password: value.password.clone(),
            role: Role::Student,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,

    #[validate(length(min = 1, max = 255, message = "Password is required"))]
    pub new_password: String,

    #[validate(must_match(other = "new_password", message = "Passwords must match"))]
    pub confirm_password: String,
}

impl ResetPasswordRequest {
    /// Sent as a form body, never in the query string.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("otp".to_string(), self.otp.clone()),
            ("new_password".to_string(), self.new_password.clone()),
            ("confirm_password".to_string(), self.confirm_password.clone()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Old Password is required"))]
    pub old_password: String,

    #[validate(length(min = 1, max = 255, message = "Password is required"))]
    pub new_password: String,

    #[validate(must_match(other = "new_password", message = "Passwords must match"))]
    pub confirm_password: String,
}

impl ChangePasswordRequest {
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("old_password".to_string(), self.old_password.clone()),
            ("new_password".to_string(), self.new_password.clone()),
        ]
    }
}
