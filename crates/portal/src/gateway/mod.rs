mod context;
mod http;
mod request;

pub use self::context::{SessionContext, SessionState};
pub use self::http::{HttpGateway, REFRESH_PATH, REQUEST_ID_HEADER};
pub use self::request::{ApiRequest, RequestBody};
