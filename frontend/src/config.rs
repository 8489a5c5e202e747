/// Startup configuration for the widget.
///
/// The API base URL is resolved once here and injected into the
/// [`crate::services::api::ApiClient`]; nothing else reads the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

const DEFAULT_API_URL: &str = "http://localhost:8000";

impl AppConfig {
    /// Build the configuration from the compile-time environment.
    ///
    /// Trunk passes `BOOKING_API_URL` through to the wasm build; without it
    /// the widget talks to a local backend.
    pub fn from_env() -> Self {
        let raw = option_env!("BOOKING_API_URL").unwrap_or(DEFAULT_API_URL);
        Self {
            api_base_url: raw.trim_end_matches('/').to_string(),
        }
    }
}
