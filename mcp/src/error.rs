//! Bridge error types.
//!
//! Covers configuration failures detected at startup, non-success responses from
//! the abilities REST API, and transport/decoding failures underneath them.

use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx response from the abilities API (list, detail, or run endpoint).
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Upstream {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    pub fn upstream(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        BridgeError::Upstream {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    /// HTTP status reported by the abilities API, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            BridgeError::Upstream { status, .. } => Some(*status),
            BridgeError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_carries_status_and_body() {
        let err = BridgeError::upstream("GET /abilities", 401, "{\"code\":\"rest_forbidden\"}");
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("rest_forbidden"));
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_config_has_no_status() {
        let err = BridgeError::Config("missing username".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Configuration error: missing username");
    }
}
