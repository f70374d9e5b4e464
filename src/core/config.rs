//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL prefixed to the auth endpoints (signup and session
    /// provider). Empty/absent means same-origin relative paths.
    /// Example: https://auth.example.com
    pub auth_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_base_url: std::env::var("AUTH_BASE_URL").ok(),
        }
    }

    /// Check if an auth base URL is configured
    pub fn has_auth_base_url(&self) -> bool {
        self.auth_base_url.is_some()
    }

    /// Auth base URL, falling back to same-origin relative paths
    pub fn auth_base_url_or_default(&self) -> &str {
        self.auth_base_url.as_deref().unwrap_or("")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
