mod file_store;
mod memory;

pub use self::file_store::FileStorage;
pub use self::memory::MemoryStorage;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const SELECTED_SCHOOL_KEY: &str = "selectedSchool";
