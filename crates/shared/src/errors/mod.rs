mod client;
mod error;
mod http;
mod storage;

pub use self::client::ClientError;
pub use self::error::ErrorResponse;
pub use self::http::GENERIC_ERROR_MESSAGE;
pub use self::storage::StorageError;
