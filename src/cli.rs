//! Command line / environment configuration.

use std::path::PathBuf;

use clap::Parser;
use wp_abilities_mcp::{BridgeConfig, BridgeResult, ProxyConfig};

#[derive(Debug, Parser)]
#[command(
    name = "wp-mcp-bridge",
    version,
    about = "Expose WordPress abilities as MCP tools over stdio"
)]
pub struct Cli {
    /// YAML configuration file; flags and environment variables override it
    #[arg(long, env = "WP_MCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Site URL or REST root (e.g. https://example.com or https://example.com/wp-json)
    #[arg(long, env = "WORDPRESS_URL")]
    pub url: Option<String>,

    #[arg(long, env = "WORDPRESS_USERNAME")]
    pub username: Option<String>,

    /// WordPress application password
    #[arg(long, env = "WORDPRESS_APPLICATION_PASSWORD", hide_env_values = true)]
    pub application_password: Option<String>,

    /// Seconds a discovered ability list is reused
    #[arg(long, env = "WP_MCP_CACHE_TTL_SECS")]
    pub cache_ttl_secs: Option<u64>,

    /// Per-request deadline in seconds (default: none)
    #[arg(long, env = "WP_MCP_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, env = "WP_MCP_HTTP_PROXY")]
    pub http_proxy: Option<String>,

    #[arg(long, env = "WP_MCP_HTTPS_PROXY")]
    pub https_proxy: Option<String>,

    /// Comma-separated hosts that bypass the proxy
    #[arg(long, env = "WP_MCP_NO_PROXY")]
    pub no_proxy: Option<String>,

    #[arg(long, env = "WP_MCP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "WP_MCP_LOG_JSON")]
    pub log_json: bool,
}

impl Cli {
    /// Load the optional YAML file and overlay flag / environment values.
    pub fn to_config(&self) -> BridgeResult<BridgeConfig> {
        let mut config = match &self.config {
            Some(path) => BridgeConfig::from_yaml_file(path)?,
            None => BridgeConfig::default(),
        };

        if let Some(url) = &self.url {
            config.site.url = url.clone();
        }
        if let Some(username) = &self.username {
            config.site.username = username.clone();
        }
        if let Some(password) = &self.application_password {
            config.site.application_password = password.clone();
        }
        if let Some(ttl) = self.cache_ttl_secs {
            config.directory.cache_ttl_secs = ttl;
        }
        if self.request_timeout_secs.is_some() {
            config.request_timeout_secs = self.request_timeout_secs;
        }

        if self.http_proxy.is_some() || self.https_proxy.is_some() || self.no_proxy.is_some() {
            let proxy = config.proxy.get_or_insert_with(ProxyConfig::default);
            if let Some(http) = &self.http_proxy {
                proxy.http = Some(http.clone());
            }
            if let Some(https) = &self.https_proxy {
                proxy.https = Some(https.clone());
            }
            if let Some(no_proxy) = &self.no_proxy {
                proxy.no_proxy = Some(no_proxy.clone());
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_flags_build_config() {
        let cli = Cli::try_parse_from([
            "wp-mcp-bridge",
            "--url",
            "https://example.com",
            "--username",
            "admin",
            "--application-password",
            "secret",
            "--cache-ttl-secs",
            "10",
            "--https-proxy",
            "http://proxy:3128",
        ])
        .unwrap();

        let config = cli.to_config().unwrap();
        assert_eq!(config.site.url, "https://example.com");
        assert_eq!(config.site.username, "admin");
        assert_eq!(config.site.application_password, "secret");
        assert_eq!(config.directory.cache_ttl_secs, 10);
        assert_eq!(
            config.proxy.unwrap().https.as_deref(),
            Some("http://proxy:3128")
        );
        assert_eq!(cli.log_level, "info");
        assert!(!cli.log_json);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "site:\n  url: https://file.example.com\n  username: file-user\n  application_password: file-pass\ndirectory:\n  cache_ttl_secs: 5"
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from([
            "wp-mcp-bridge",
            "--config",
            path.as_str(),
            "--username",
            "cli-user",
        ])
        .unwrap();

        let config = cli.to_config().unwrap();
        assert_eq!(config.site.url, "https://file.example.com");
        assert_eq!(config.site.username, "cli-user");
        assert_eq!(config.site.application_password, "file-pass");
        assert_eq!(config.directory.cache_ttl_secs, 5);
        assert!(config.validate().is_ok());
    }
}
