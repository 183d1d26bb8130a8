use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SCHOOL: &str = "apollo-high-school";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub storage_path: PathBuf,
    pub user_list_limit: u32,
    pub default_school: String,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    /// Defaults for everything but the backend address.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(30),
            storage_path: PathBuf::from("./.portal/storage.json"),
            user_list_limit: 100,
            default_school: DEFAULT_SCHOOL.to_string(),
            is_dev: false,
            enable_file_log: false,
        }
    }

    pub fn init() -> Result<Self> {
        let api_url = std::env::var("API_URL").context("Missing environment variable: API_URL")?;

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(anyhow!(
                "API_URL must start with http:// or https://, got '{}'",
                api_url
            ));
        }

        let mut config = Self::new(api_url);

        if let Ok(timeout) = std::env::var("API_TIMEOUT_SECS") {
            let secs = timeout
                .parse::<u64>()
                .context("API_TIMEOUT_SECS must be a valid u64 integer")?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(path) = std::env::var("STORAGE_PATH") {
            config.storage_path = PathBuf::from(path);
        }

        if let Ok(limit) = std::env::var("USER_LIST_LIMIT") {
            config.user_list_limit = limit
                .parse::<u32>()
                .context("USER_LIST_LIMIT must be a valid u32 integer")?;
        }

        if let Ok(school) = std::env::var("DEFAULT_SCHOOL") {
            config.default_school = school;
        }

        config.is_dev = env_flag("DEV_MODE");
        config.enable_file_log = env_flag("ENABLE_FILE_LOG");

        Ok(config)
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}
