//! Console configuration loaded from environment variables.

/// Port the recommendations service listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// All configuration for the console.
///
/// Loaded from env vars after `dotenv::dotenv().ok()`. CLI flags override.
#[derive(Debug)]
pub struct ConsoleConfig {
    /// Base URL of the recommendations service (`RECOMMENDATIONS_BASE_URL`).
    /// default: `"http://localhost:8888"`
    pub base_url: String,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("RECOMMENDATIONS_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }
}
