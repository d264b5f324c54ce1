//! Ability behavior annotations.
//!
//! The abilities API reports `readonly`, `destructive` and `idempotent` as
//! optional (and sometimes `null`) booleans. [`AbilityAnnotations`] flattens them
//! to plain `bool` with `false` defaults, so only an explicit `readonly: true`
//! marks an ability as side-effect free.

use rmcp::model::ToolAnnotations as RmcpToolAnnotations;
use serde::{Deserialize, Serialize};

/// Wire shape of the annotations object.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawAnnotations {
    #[serde(default)]
    readonly: Option<bool>,
    #[serde(default)]
    destructive: Option<bool>,
    #[serde(default)]
    idempotent: Option<bool>,
}

/// Side-effect hints declared by an ability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAnnotations")]
pub struct AbilityAnnotations {
    pub readonly: bool,
    pub destructive: bool,
    pub idempotent: bool,
}

impl From<RawAnnotations> for AbilityAnnotations {
    fn from(raw: RawAnnotations) -> Self {
        Self {
            readonly: raw.readonly.unwrap_or(false),
            destructive: raw.destructive.unwrap_or(false),
            idempotent: raw.idempotent.unwrap_or(false),
        }
    }
}

impl AbilityAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_readonly(mut self, v: bool) -> Self {
        self.readonly = v;
        self
    }

    #[must_use]
    pub fn with_destructive(mut self, v: bool) -> Self {
        self.destructive = v;
        self
    }

    #[must_use]
    pub fn with_idempotent(mut self, v: bool) -> Self {
        self.idempotent = v;
        self
    }

    /// Project into MCP tool hints. Absent annotations still produce explicit
    /// `false` hints rather than leaving MCP's own defaults in effect.
    pub fn to_rmcp(self, title: Option<String>) -> RmcpToolAnnotations {
        RmcpToolAnnotations {
            title,
            read_only_hint: Some(self.readonly),
            destructive_hint: Some(self.destructive),
            idempotent_hint: Some(self.idempotent),
            open_world_hint: None,
        }
    }
}
