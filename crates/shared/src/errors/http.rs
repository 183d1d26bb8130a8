use crate::errors::{client::ClientError, error::ErrorResponse};

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again";

impl ClientError {
    /// Maps a non-success HTTP answer to an error, keeping the server's message
    /// when the body carries one.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = ErrorResponse::parse(body)
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| format!("Request failed with status code {status}"));

        match status {
            400 | 422 => ClientError::BadRequest(message),
            401 => ClientError::Unauthorized(message),
            403 => ClientError::Forbidden(message),
            404 => ClientError::NotFound(message),
            409 => ClientError::Conflict(message),
            _ => ClientError::Server { status, message },
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::BadRequest(_) => Some(400),
            ClientError::Unauthorized(_) | ClientError::SessionExpired => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Conflict(_) => Some(409),
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for the alert banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(errors) if !errors.is_empty() => errors.join("; "),
            ClientError::BadRequest(msg)
            | ClientError::Unauthorized(msg)
            | ClientError::Forbidden(msg)
            | ClientError::NotFound(msg)
            | ClientError::Conflict(msg)
            | ClientError::Server { message: msg, .. } => msg.clone(),
            ClientError::SessionExpired => "Your session has expired, please log in again".into(),
            ClientError::Network(msg) => msg.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
