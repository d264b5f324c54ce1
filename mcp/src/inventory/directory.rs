//! Cached directory of the abilities registered on the site.
//!
//! The directory owns a single snapshot (ability list, exact tool-name table and
//! fetch time). A snapshot is only ever replaced as a whole through an atomic
//! pointer swap, so concurrent readers see either the old list or the new one.
//! Concurrent refreshes of an expired snapshot are not de-duplicated; the list
//! endpoint is a plain read, so the last successful fetch simply wins.

use std::{collections::HashSet, sync::Arc, time::Duration};

use arc_swap::ArcSwapOption;
use tokio::time::Instant;
use tracing::{debug, info};

use super::types::Ability;
use crate::{
    core::client::AbilitiesClient,
    error::BridgeResult,
    naming::{to_ability_name, to_tool_name, ToolNameTable},
};

/// One successful fetch of the ability list.
#[derive(Debug)]
pub struct DirectorySnapshot {
    abilities: Vec<Ability>,
    tool_names: ToolNameTable,
    fetched_at: Instant,
}

impl DirectorySnapshot {
    pub fn new(abilities: Vec<Ability>) -> Self {
        let tool_names =
            ToolNameTable::from_ability_names(abilities.iter().map(|a| a.name.as_str()));
        Self {
            abilities,
            tool_names,
            fetched_at: Instant::now(),
        }
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn tool_names(&self) -> &ToolNameTable {
        &self.tool_names
    }

    pub fn fetched_at(&self) -> Instant {
        self.fetched_at
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }

    /// Abilities to advertise as tools: the first ability per tool name, the
    /// same one calls under that name resolve to.
    pub fn advertised(&self) -> Vec<&Ability> {
        let mut seen = HashSet::new();
        self.abilities
            .iter()
            .filter(|a| {
                let tool_name = to_tool_name(&a.name);
                self.tool_names.get(&tool_name) == Some(a.name.as_str()) && seen.insert(tool_name)
            })
            .collect()
    }

    pub fn find(&self, ability_name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.name == ability_name)
    }
}

pub struct AbilityDirectory {
    client: Arc<AbilitiesClient>,
    ttl: Duration,
    cache: ArcSwapOption<DirectorySnapshot>,
}

impl AbilityDirectory {
    pub fn new(client: Arc<AbilitiesClient>, ttl: Duration) -> Self {
        Self {
            client,
            ttl,
            cache: ArcSwapOption::empty(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current ability list, fetched only when the cached one is missing or expired.
    ///
    /// A failed refresh leaves the previous snapshot in place and returns the
    /// error; expired data is never served in its stead.
    pub async fn discover(&self) -> BridgeResult<Arc<DirectorySnapshot>> {
        if let Some(snapshot) = self.cache.load_full() {
            if snapshot.is_fresh(self.ttl) {
                debug!(
                    count = snapshot.abilities().len(),
                    "Serving cached ability list"
                );
                return Ok(snapshot);
            }
            debug!("Cached ability list expired, refreshing");
        }

        let abilities = self.client.list_abilities().await?;
        let snapshot = Arc::new(DirectorySnapshot::new(abilities));
        self.cache.store(Some(Arc::clone(&snapshot)));

        info!(count = snapshot.abilities().len(), "Discovered abilities");
        Ok(snapshot)
    }

    /// Last stored snapshot, stale or not, without touching the network.
    pub fn cached(&self) -> Option<Arc<DirectorySnapshot>> {
        self.cache.load_full()
    }

    /// Authoritative record for one ability, always fetched fresh.
    pub async fn get_details(&self, ability_name: &str) -> BridgeResult<Ability> {
        self.client.get_ability(ability_name).await
    }

    /// Map a tool name back to an ability identifier, exactly when the name was
    /// seen in the last discovery and by the lossy reverse rule otherwise.
    pub fn resolve_tool_name(&self, tool_name: &str) -> String {
        match self.cache.load_full() {
            Some(snapshot) => snapshot.tool_names().resolve(tool_name),
            None => to_ability_name(tool_name),
        }
    }
}
