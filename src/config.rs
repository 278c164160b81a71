use std::time::Duration;

use serde::{Deserialize, Deserializer};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Settings shared by all resolutions. The timeout applies to each HTTP call separately.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    #[serde(rename = "requestTimeoutSecs", deserialize_with = "duration_from_secs")]
    pub request_timeout: Duration,
    /// `None` means no limit
    pub max_pages: Option<usize>,
    pub user_agent: String,
}
impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_pages: Some(DEFAULT_MAX_PAGES),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

fn duration_from_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}
