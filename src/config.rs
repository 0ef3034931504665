use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_LOOKUP_BASE_URL: &str = "http://ip-api.com";
pub const DEFAULT_DATA_FILE: &str = "ip_data.json";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_lookup_base_url() -> String {
    sanitize_base_url(&env::var("LOOKUP_BASE_URL").unwrap_or_else(|_| DEFAULT_LOOKUP_BASE_URL.to_string()))
}

pub fn get_data_file() -> String {
    let raw = env::var("DATA_FILE").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_DATA_FILE.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_LOOKUP_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
