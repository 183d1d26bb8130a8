mod jwt;
mod myconfig;

pub use self::jwt::{AccessClaims, JwtConfig};
pub use self::myconfig::{Config, DEFAULT_SCHOOL};
