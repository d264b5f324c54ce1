//! Bridge configuration types and utilities.
//!
//! Configuration can come from a YAML file and is then overlaid with values from
//! the command line / environment by the binary. Credentials are required; the
//! bridge refuses to start without them.

use std::{fmt, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BridgeError, BridgeResult};

/// REST namespace of the abilities API.
pub const ABILITIES_NAMESPACE: &str = "wp-abilities/v1";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BridgeConfig {
    /// WordPress site and credentials
    #[serde(default)]
    pub site: SiteConfig,

    /// Ability list caching
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Outbound HTTP proxy for all abilities API traffic
    #[serde(default)]
    pub proxy: Option<ProxyConfig>,

    /// Per-request deadline in seconds. Unset means no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Site URL (e.g. "https://example.com") or REST root ("https://example.com/wp-json")
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub username: String,

    /// WordPress application password
    #[serde(default)]
    pub application_password: String,
}

impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field(
                "application_password",
                &(!self.application_password.is_empty()).then_some("****"),
            )
            .finish()
    }
}

impl SiteConfig {
    /// `{rest root}/wp-abilities/v1`, without a trailing slash.
    pub fn api_base(&self) -> BridgeResult<String> {
        let parsed = Url::parse(self.url.trim())
            .map_err(|e| BridgeError::Config(format!("Invalid site URL '{}': {}", self.url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BridgeError::Config(format!(
                "Site URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let root = parsed.as_str().trim_end_matches('/');
        let rest_root = if root.ends_with("/wp-json") {
            root.to_string()
        } else {
            format!("{root}/wp-json")
        };
        Ok(format!("{rest_root}/{ABILITIES_NAMESPACE}"))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// How long a discovered ability list is served without refetching
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// `per_page` sent to the list endpoint
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_cache_ttl_secs() -> u64 {
    60
}

fn default_per_page() -> u32 {
    100
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
            per_page: default_per_page(),
        }
    }
}

impl DirectoryConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Outbound proxy configuration
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// HTTP proxy URL (e.g., "http://proxy.internal:8080")
    pub http: Option<String>,

    /// HTTPS proxy URL
    pub https: Option<String>,

    /// Comma-separated hosts to exclude from proxying
    /// Example: "localhost,127.0.0.1,*.internal"
    pub no_proxy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("http", &self.http)
            .field("https", &self.https)
            .field("no_proxy", &self.no_proxy)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .finish()
    }
}

impl ProxyConfig {
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}

impl BridgeConfig {
    pub fn from_yaml_str(yaml: &str) -> BridgeResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Fail fast on missing credentials or an unusable site URL.
    pub fn validate(&self) -> BridgeResult<()> {
        let mut missing = Vec::new();
        if self.site.url.trim().is_empty() {
            missing.push("site URL (WORDPRESS_URL)");
        }
        if self.site.username.trim().is_empty() {
            missing.push("username (WORDPRESS_USERNAME)");
        }
        if self.site.application_password.trim().is_empty() {
            missing.push("application password (WORDPRESS_APPLICATION_PASSWORD)");
        }
        if !missing.is_empty() {
            return Err(BridgeError::Config(format!(
                "Missing required configuration: {}",
                missing.join(", ")
            )));
        }

        self.site.api_base()?;

        if self.directory.per_page == 0 {
            return Err(BridgeError::Config(
                "directory.per_page must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(BridgeError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
