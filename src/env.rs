use std::env;
use std::time::Duration;

pub const BASE_URL_VAR: &str = "STEAM_WEB_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "STEAM_WEB_API_TIMEOUT_SECS";

pub fn get_base_url() -> Option<String> {
    env::var(BASE_URL_VAR).ok()
}

/// Request timeout in whole seconds, unparsable values are ignored
pub fn get_timeout() -> Option<Duration> {
    env::var(TIMEOUT_VAR).ok()
        .and_then(|secs| secs.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
