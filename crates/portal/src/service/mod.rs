mod account;
mod auth;
mod profile;
mod user;

pub use self::account::{AccountService, SchoolService};
pub use self::auth::AuthService;
pub use self::profile::ProfileService;
pub use self::user::UserService;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{domain::responses::MessageResponse, errors::ClientError};

pub(crate) fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ClientError> {
    serde_json::from_value(body).map_err(ClientError::from)
}

/// Endpoints that answer with `{message}`, or with nothing at all.
pub(crate) fn decode_message(body: Value) -> Result<MessageResponse, ClientError> {
    match body {
        Value::Null => Ok(MessageResponse {
            message: String::new(),
        }),
        Value::String(message) => Ok(MessageResponse { message }),
        other => decode(other),
    }
}
