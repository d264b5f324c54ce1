//! Mapping between ability identifiers and MCP tool names.
//!
//! Abilities are named `category/action` (e.g. `core/get-site-info`), while MCP
//! tool names are flat. The forward rule is `wp_` + category + `_` + action with
//! its hyphens folded to underscores (`wp_core_get_site_info`). The reverse rule
//! takes the first underscore-separated segment as the category and rejoins the
//! rest with hyphens.
//!
//! The reverse rule is lossy: underscores already present in either segment are
//! indistinguishable from separators, so `my_cat/do-thing` comes back as
//! `my/cat-do-thing`. [`ToolNameTable`] records the exact mapping for every
//! discovered ability so the call path can avoid the lossy rule when possible.

use std::collections::HashMap;

use tracing::warn;

/// Prefix applied to every tool name derived from an ability.
pub const TOOL_NAME_PREFIX: &str = "wp_";

/// `core/get-site-info` -> `wp_core_get_site_info`.
pub fn to_tool_name(ability_name: &str) -> String {
    let flat = match ability_name.split_once('/') {
        Some((category, action)) => format!("{}_{}", category, fold_action(action)),
        None => fold_action(ability_name),
    };
    format!("{TOOL_NAME_PREFIX}{flat}")
}

/// `wp_core_get_site_info` -> `core/get-site-info`.
pub fn to_ability_name(tool_name: &str) -> String {
    let rest = tool_name
        .strip_prefix(TOOL_NAME_PREFIX)
        .unwrap_or(tool_name);
    match rest.split_once('_') {
        Some((category, action)) => format!("{}/{}", category, action.replace('_', "-")),
        None => rest.to_string(),
    }
}

fn fold_action(action: &str) -> String {
    action.replace(['-', '/'], "_")
}

/// Exact tool-name -> ability identifier table built from one discovery result.
#[derive(Debug, Clone, Default)]
pub struct ToolNameTable {
    by_tool_name: HashMap<String, String>,
}

impl ToolNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ability identifiers. On collision the first identifier wins.
    pub fn from_ability_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut table = Self::new();
        for name in names {
            table.insert(name);
        }
        table
    }

    pub fn insert(&mut self, ability_name: &str) {
        let tool_name = to_tool_name(ability_name);
        match self.by_tool_name.get(&tool_name) {
            Some(existing) if existing != ability_name => {
                warn!(
                    tool_name = %tool_name,
                    kept = %existing,
                    dropped = %ability_name,
                    "Tool name collision between abilities"
                );
            }
            Some(_) => {}
            None => {
                self.by_tool_name
                    .insert(tool_name, ability_name.to_string());
            }
        }
    }

    pub fn get(&self, tool_name: &str) -> Option<&str> {
        self.by_tool_name.get(tool_name).map(String::as_str)
    }

    /// Exact lookup, falling back to the lossy reverse rule for unknown names.
    pub fn resolve(&self, tool_name: &str) -> String {
        self.get(tool_name)
            .map(str::to_string)
            .unwrap_or_else(|| to_ability_name(tool_name))
    }

    pub fn len(&self) -> usize {
        self.by_tool_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tool_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_mapping() {
        assert_eq!(to_tool_name("core/get-site-info"), "wp_core_get_site_info");
        assert_eq!(to_tool_name("posts/create"), "wp_posts_create");
    }

    #[test]
    fn test_reverse_mapping() {
        assert_eq!(to_ability_name("wp_core_get_site_info"), "core/get-site-info");
        assert_eq!(to_ability_name("wp_posts_create"), "posts/create");
    }

    #[test]
    fn test_round_trip_without_underscores() {
        for id in [
            "core/get-site-info",
            "core/get-user-info",
            "woocommerce/list-orders",
            "seo/audit",
            "core-data/get-entity",
        ] {
            assert_eq!(to_ability_name(&to_tool_name(id)), id, "round trip of {id}");
        }
    }

    #[test]
    fn test_round_trip_is_lossy_with_underscores() {
        assert_eq!(to_tool_name("my_cat/do-thing"), "wp_my_cat_do_thing");
        assert_ne!(to_ability_name(&to_tool_name("my_cat/do-thing")), "my_cat/do-thing");
        assert_eq!(to_ability_name(&to_tool_name("my_cat/do-thing")), "my/cat-do-thing");

        assert_ne!(to_ability_name(&to_tool_name("core/do_thing")), "core/do_thing");
    }

    #[test]
    fn test_reverse_without_separator() {
        assert_eq!(to_ability_name("wp_orphan"), "orphan");
        assert_eq!(to_ability_name("plain"), "plain");
    }

    #[test]
    fn test_table_resolves_exactly() {
        let table = ToolNameTable::from_ability_names(["my_cat/do-thing", "core/get-site-info"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("wp_my_cat_do_thing"), "my_cat/do-thing");
        assert_eq!(table.resolve("wp_core_get_site_info"), "core/get-site-info");
    }

    #[test]
    fn test_table_falls_back_to_lossy_rule() {
        let table = ToolNameTable::new();
        assert!(table.is_empty());
        assert_eq!(table.resolve("wp_core_get_site_info"), "core/get-site-info");
    }

    #[test]
    fn test_table_collision_keeps_first() {
        let table = ToolNameTable::from_ability_names(["a_b/c", "a/b-c"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("wp_a_b_c"), Some("a_b/c"));
    }
}
