mod jwt;
mod storage;

pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::storage::{DynTokenStorage, TokenStorageTrait};
