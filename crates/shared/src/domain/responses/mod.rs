mod account;
mod auth;
mod user;

pub use self::account::{
    SchoolList, SchoolResponse, TransactionList, TransactionResponse, TransactionUser,
};
pub use self::auth::{LoginResponse, MessageResponse, RefreshResponse};
pub use self::user::{
    ContactEntry, PickupLocation, ProfileDetails, ProfileUser, UserList, UserProfile,
    UserResponse,
};
