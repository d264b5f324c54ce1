//! Translation of abilities into MCP shapes.
//!
//! - [`schema`]: input schema canonicalization and the accepts-input predicate
//! - [`tool`]: tool descriptor projection and call result rendering

pub mod schema;
pub mod tool;

pub use schema::{accepts_input, canonicalize, empty_object_schema, schema_accepts_input};
pub use tool::{ability_to_tool, error_result, success_result, tool_description};
