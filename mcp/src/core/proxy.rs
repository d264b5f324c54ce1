//! HTTP proxy support for abilities API traffic.
//!
//! Applies [`ProxyConfig`] settings to a `reqwest::ClientBuilder`.

use super::config::ProxyConfig;
use crate::error::{BridgeError, BridgeResult};

/// Apply proxy configuration to a ClientBuilder
///
/// Applies proxy settings without building the client, so default headers
/// and timeouts can still be added afterward.
pub(crate) fn apply_proxy_to_builder(
    mut builder: reqwest::ClientBuilder,
    proxy_cfg: &ProxyConfig,
) -> BridgeResult<reqwest::ClientBuilder> {
    if let Some(ref http_proxy) = proxy_cfg.http {
        let proxy = reqwest::Proxy::http(http_proxy)
            .map_err(|e| BridgeError::Config(format!("Invalid HTTP proxy: {}", e)))?;
        builder = builder.proxy(configure_proxy(proxy, proxy_cfg));
    }

    if let Some(ref https_proxy) = proxy_cfg.https {
        let proxy = reqwest::Proxy::https(https_proxy)
            .map_err(|e| BridgeError::Config(format!("Invalid HTTPS proxy: {}", e)))?;
        builder = builder.proxy(configure_proxy(proxy, proxy_cfg));
    }

    Ok(builder)
}

/// no_proxy exclusions and proxy credentials, shared by both schemes.
fn configure_proxy(mut proxy: reqwest::Proxy, proxy_cfg: &ProxyConfig) -> reqwest::Proxy {
    if let Some(ref no_proxy) = proxy_cfg.no_proxy {
        proxy = proxy.no_proxy(reqwest::NoProxy::from_string(no_proxy));
    }

    if let (Some(ref username), Some(ref password)) = (&proxy_cfg.username, &proxy_cfg.password) {
        proxy = proxy.basic_auth(username, password);
    }

    proxy
}
