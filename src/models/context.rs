use std::path::PathBuf;

/// Shared handles every menu operation borrows: the HTTP client, the
/// resolved lookup endpoint, and where save/load point.
#[derive(Clone)]
pub struct AppContext {
    pub client: reqwest::Client,
    pub lookup_base_url: String,
    pub data_file: PathBuf,
}
