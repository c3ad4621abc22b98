//! API endpoint configuration for the link client.

use tracing::debug;

/// Path of the link-token creation endpoint.
pub const CREATE_LINK_PATH: &str = "/create_link";
/// Path of the credential submission endpoint.
pub const SUBMIT_CREDENTIALS_PATH: &str = "/submit_credentials";
/// Path of the data fetch endpoint.
pub const FETCH_DATA_PATH: &str = "/fetch_data";

/// Used when neither a build-time override nor a browser origin is available.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the API base URL for the current build and host.
    ///
    /// Order of precedence:
    /// 1. `LINK_API_BASE_URL` set at compile time
    /// 2. the page origin (`window.location.origin`) when running in a browser
    /// 3. [`DEFAULT_BASE_URL`]
    pub fn from_environment() -> Self {
        if let Some(base_url) = option_env!("LINK_API_BASE_URL") {
            debug!("Using build-time API base URL: {}", base_url);
            return Self::new(base_url);
        }

        if let Some(origin) = page_origin() {
            debug!("Using page origin as API base URL: {}", origin);
            return Self::new(origin);
        }

        Self::new(DEFAULT_BASE_URL)
    }

    /// Absolute URL of an endpoint path such as [`CREATE_LINK_PATH`].
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_environment()
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .filter(|origin| !origin.is_empty() && origin != "null")
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_stripped() {
        let config = ApiConfig::new("http://127.0.0.1:9000//");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let config = ApiConfig::new("http://api.example.test/");
        assert_eq!(
            config.endpoint(CREATE_LINK_PATH),
            "http://api.example.test/create_link"
        );
        assert_eq!(
            config.endpoint("fetch_data"),
            "http://api.example.test/fetch_data"
        );
    }

    #[test]
    fn test_native_environment_falls_back_to_default() {
        if option_env!("LINK_API_BASE_URL").is_none() {
            assert_eq!(ApiConfig::from_environment().base_url, DEFAULT_BASE_URL);
        }
    }
}
