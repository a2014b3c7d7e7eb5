//! Build-time configuration for the auth API endpoint. Configuration values
//! are public; do not store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables. An empty base URL
    /// means same-origin requests.
    #[must_use]
    pub fn load() -> Self {
        let api_base_url = option_env!("HORIZON_API_BASE_URL").unwrap_or("");

        Self {
            api_base_url: api_base_url.to_string(),
        }
    }
}
