mod account;
mod auth;
mod profile;
mod user;

pub use self::account::{FindAllSchools, FindAllTransactions};
pub use self::auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterPayload, RegisterRequest,
    ResetPasswordRequest,
};
pub use self::profile::UpdateProfileRequest;
pub use self::user::{CreateUserRequest, FindAllUsers};
